mod render;

use render::run_render;

use anyhow::Result;

use crate::cli::Cli;
use crate::display::Context;

pub fn run(cli: Cli, ctx: Context) -> Result<()> {
    run_render(cli, ctx)
}
