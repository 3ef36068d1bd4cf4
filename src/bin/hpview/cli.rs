use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hpview",
    about = "3D visualization of backbone/sidechain HP lattice protein models",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Input coordinate file (x,y,z per line, optional H/P label line)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output figure file; written next to the input as <INPUT>.svg if omitted
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, value_name = "PX", default_value = "800")]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, value_name = "PX", default_value = "600")]
    pub height: u32,

    /// Caption drawn above the figure
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Ignore the label line and draw an uncolored model
    #[arg(long)]
    pub no_color: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
