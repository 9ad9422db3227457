use anyhow::{Context, Result};

use crate::context::RenderContext;

/// Print the theme in effect, after `--theme` and width fitting, as TOML.
pub fn execute(ctx: &RenderContext) -> Result<()> {
    let rendered = toml::to_string_pretty(ctx.theme()).context("Failed to serialize theme")?;
    print!("{rendered}");
    Ok(())
}
