use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use anticipate_cli::{
    cli::{Cli, Commands},
    commands,
    context::RenderContext,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Frames go to stdout, so logs stay on stderr.
    let env_filter = match cli.level_filter() {
        Some(level) => EnvFilter::new(format!("anticipate_cli={level},anticipate_render={level}")),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::OFF.into())
            .from_env_lossy(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = RenderContext::from_cli(&cli)?;
    debug!(theme = ?cli.theme, color = ?cli.color, "render context ready");

    match cli.command {
        Commands::Render {
            path,
            format,
            follow,
        } => commands::render::execute(&ctx, &path, format, follow)?,
        Commands::Demo { scroll } => commands::demo::execute(&ctx, scroll)?,
        Commands::Theme => commands::theme::execute(&ctx)?,
    }

    Ok(())
}
