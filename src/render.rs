//! Figure generation using plotters (SVG output).
//!
//! Uses the SVG backend to avoid system font dependencies; a `.png`
//! output path is transparently redirected to `.svg`.

use crate::model::chain::HpChain;
use crate::model::polarity::Polarity;
use anyhow::Result;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};

const MARKER_SIZE: i32 = 4;

/// Owned render context: figure geometry and captioning, constructed
/// once by the caller and passed down.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
        }
    }
}

fn polarity_color(polarity: Polarity) -> RGBColor {
    match polarity {
        Polarity::Hydrophobic => RED,
        Polarity::Polar => BLUE,
    }
}

/// Renders the model as a static 3D figure and returns the path
/// actually written (which differs from `path` when a `.png` request
/// was redirected to SVG).
///
/// Drawn per the model contract: backbone beads as black crosses joined
/// by a grey trace, sidechain beads as circles colored by polarity when
/// labels are present (red H, blue P; legend shown) or a fixed red
/// otherwise, and one grey connector per backbone/sidechain unit.
pub fn render_figure(path: &Path, chain: &HpChain, config: &RenderConfig) -> Result<PathBuf> {
    chain.validate()?;

    let svg_path = if path.extension().map(|e| e == "png").unwrap_or(false) {
        path.with_extension("svg")
    } else {
        path.to_path_buf()
    };

    let out_path = svg_path.clone();
    let root = SVGBackend::new(&svg_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    if chain.points.is_empty() {
        root.draw(&Text::new(
            "Empty model",
            (config.width as i32 / 2, config.height as i32 / 2),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(out_path);
    }

    let (x_range, y_range, z_range) = axis_ranges(chain);

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if let Some(title) = &config.title {
        builder.caption(title, ("sans-serif", 20));
    }
    let mut chart = builder.build_cartesian_3d(x_range, y_range, z_range)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });
    chart.configure_axes().draw()?;

    let grey = full_palette::GREY;

    // Backbone trace, in sequence order.
    chart.draw_series(LineSeries::new(
        chain.backbone().map(|p| p.as_f64()),
        &grey,
    ))?;

    // One connector per unit; sidechains are never joined to each other.
    for unit in chain.units() {
        chart.draw_series(LineSeries::new(
            [unit.backbone.as_f64(), unit.sidechain.as_f64()],
            &grey,
        ))?;
    }

    chart.draw_series(
        chain
            .backbone()
            .map(|p| Cross::new(p.as_f64(), MARKER_SIZE, BLACK.stroke_width(1))),
    )?;

    if chain.is_colored() {
        for polarity in [Polarity::Hydrophobic, Polarity::Polar] {
            let color = polarity_color(polarity);
            chart
                .draw_series(
                    chain
                        .units()
                        .filter(|u| u.label == Some(polarity))
                        .map(|u| Circle::new(u.sidechain.as_f64(), MARKER_SIZE, color.filled())),
                )?
                .label(polarity.to_string())
                .legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled()));
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
    } else {
        chart.draw_series(
            chain
                .sidechains()
                .map(|p| Circle::new(p.as_f64(), MARKER_SIZE, RED.filled())),
        )?;
    }

    root.present()?;
    Ok(out_path)
}

/// One lattice unit of margin around the model bounds, so boundary
/// beads are not clipped by the axis planes.
fn axis_ranges(
    chain: &HpChain,
) -> (
    std::ops::Range<f64>,
    std::ops::Range<f64>,
    std::ops::Range<f64>,
) {
    let (min, max) = crate::analysis::measure(chain)
        .bounds
        .expect("non-empty model");
    (
        (min.x - 1) as f64..(max.x + 1) as f64,
        (min.y - 1) as f64..(max.y + 1) as f64,
        (min.z - 1) as f64..(max.z + 1) as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::point::LatticePoint;
    use tempfile::TempDir;

    fn pt(x: i32, y: i32, z: i32) -> LatticePoint {
        LatticePoint::new(x, y, z)
    }

    fn colored_chain() -> HpChain {
        HpChain::new(
            vec![pt(0, 0, 0), pt(0, 0, 1), pt(1, 0, 0), pt(1, 0, -1)],
            vec![Polarity::Hydrophobic, Polarity::Polar],
        )
    }

    #[test]
    fn writes_colored_figure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("model.svg");

        let written = render_figure(&path, &colored_chain(), &RenderConfig::default()).unwrap();
        assert_eq!(written, path);
        assert!(path.exists());
    }

    #[test]
    fn writes_uncolored_figure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("plain.svg");
        let chain = HpChain::new(vec![pt(0, 0, 0), pt(0, 0, 1)], Vec::new());

        render_figure(&path, &chain, &RenderConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn redirects_png_request_to_svg() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("model.png");

        let written = render_figure(&path, &colored_chain(), &RenderConfig::default()).unwrap();
        assert_eq!(written, tmp.path().join("model.svg"));
        assert!(written.exists());
        assert!(!path.exists());
    }

    #[test]
    fn empty_model_still_produces_a_figure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.svg");

        render_figure(&path, &HpChain::default(), &RenderConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejects_mismatched_chain() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.svg");
        let chain = HpChain::new(
            vec![pt(0, 0, 0), pt(0, 0, 1)],
            vec![Polarity::Hydrophobic, Polarity::Polar],
        );

        let err = render_figure(&path, &chain, &RenderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("labels"));
        assert!(!path.exists());
    }

    #[test]
    fn caption_is_optional() {
        let tmp = TempDir::new().unwrap();
        let config = RenderConfig {
            title: Some("8-residue model".into()),
            ..RenderConfig::default()
        };

        render_figure(&tmp.path().join("titled.svg"), &colored_chain(), &config).unwrap();
    }
}
