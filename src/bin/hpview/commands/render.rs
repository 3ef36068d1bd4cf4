use std::path::PathBuf;

use anyhow::{Context, Result};

use hpview::{measure, read_chain_file, render_figure, RenderConfig};

use crate::cli::Cli;
use crate::display::{
    print_chain_summary, print_label_distribution, Context as DisplayContext, Progress,
};

const TOTAL_STEPS: u8 = 3;

pub fn run_render(args: Cli, ctx: DisplayContext) -> Result<()> {
    let output = resolve_output(&args);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading model");
    let mut chain = read_chain_file(&args.input)
        .with_context(|| format!("Failed to read model from '{}'", args.input.display()))?;
    if args.no_color {
        chain.labels.clear();
    }
    chain.validate()?;

    let label_note = if chain.is_colored() {
        "H/P labels present".to_string()
    } else {
        "no labels (uncolored mode)".to_string()
    };
    progress.complete_step(
        "Reading model",
        &[
            format!(
                "{} beads, {} residues",
                chain.points.len(),
                chain.residue_count()
            ),
            label_note,
        ],
    );

    progress.step("Measuring structure");
    let measures = measure(&chain);
    progress.complete_step(
        "Measuring structure",
        &[format!(
            "{} collision(s), {} H-H contact(s)",
            measures.collisions, measures.hh_contacts
        )],
    );

    if ctx.interactive {
        print_chain_summary(&chain, &measures);
        print_label_distribution(&chain);
    }

    progress.step("Rendering figure");
    let config = RenderConfig {
        width: args.width,
        height: args.height,
        title: args.title.clone(),
    };
    let written = render_figure(&output, &chain, &config)
        .with_context(|| format!("Failed to render figure to '{}'", output.display()))?;
    progress.complete_step(
        "Rendering figure",
        &[format!("Write SVG → {}", written.display())],
    );

    progress.finish();

    Ok(())
}

fn resolve_output(args: &Cli) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("svg"))
}
