//! Parsing, analysis, and 3D visualization of backbone/sidechain HP
//! lattice protein models.
//!
//! An HP model file is a line-based text format: one `x,y,z` integer
//! triple per line, optionally followed by a blank line and a label
//! line of `H`/`P` characters, one per backbone/sidechain pair:
//!
//! ```text
//! 0,0,0
//! 0,0,1
//! 1,1,0
//! 2,1,0
//!
//! HP
//! ```
//!
//! Even-indexed beads form the backbone chain, odd-indexed beads the
//! sidechains; backbone bead *i* pairs with sidechain bead *i*. A file
//! with no blank line is a supported "uncolored" model.
//!
//! # Quick Start
//!
//! ```
//! use hpview::{read_chain, measure, Polarity};
//!
//! let input = "0,0,0\n0,0,1\n1,1,0\n2,1,0\n\nHP\n";
//! let chain = read_chain(input.as_bytes())?;
//! chain.validate()?;
//!
//! assert_eq!(chain.residue_count(), 2);
//! assert_eq!(chain.labels, vec![Polarity::Hydrophobic, Polarity::Polar]);
//!
//! let backbone: Vec<_> = chain.backbone().collect();
//! assert_eq!(backbone.len(), 2);
//!
//! let measures = measure(&chain);
//! assert_eq!(measures.collisions, 0);
//! # Ok::<(), hpview::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — the two-phase model loader ([`read_chain`],
//!   [`read_chain_file`])
//! - [`model`] — [`HpChain`], [`LatticePoint`], [`Polarity`] and the
//!   derived backbone/sidechain partition
//! - [`analysis`] — collision, contact, and gyration measures
//! - [`render`] — static 3D figure generation via plotters

pub mod analysis;
pub mod error;
pub mod io;
pub mod model;
pub mod render;

pub use analysis::{measure, ChainMeasures};
pub use error::Error;
pub use io::{read_chain, read_chain_file};
pub use model::chain::{HpChain, Unit};
pub use model::point::LatticePoint;
pub use model::polarity::Polarity;
pub use render::{render_figure, RenderConfig};
