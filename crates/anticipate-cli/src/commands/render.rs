use anyhow::{bail, Context, Result};
use anticipate_render::{PromptSnapshot, PromptSnapshotBuilder};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::cli::SnapshotFormat;
use crate::context::RenderContext;

pub fn execute(
    ctx: &RenderContext,
    path: &Path,
    format: Option<SnapshotFormat>,
    follow: bool,
) -> Result<()> {
    let snapshot = load_snapshot(path, format, follow)?;
    let frame = ctx.renderer().render(&snapshot);

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Read a snapshot from `path` (or stdin for `-`) and validate it.
pub fn load_snapshot(
    path: &Path,
    format: Option<SnapshotFormat>,
    follow: bool,
) -> Result<PromptSnapshot> {
    let from_stdin = path == Path::new("-");
    let format = match format {
        Some(format) => format,
        None if from_stdin => SnapshotFormat::Json,
        None => format_from_extension(path)?,
    };

    let source = if from_stdin {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read snapshot from stdin")?;
        source
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?
    };

    let mut builder = parse_snapshot(&source, format)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;
    if follow {
        builder = builder.follow_highlight();
    }
    let snapshot = builder
        .build()
        .with_context(|| format!("Inconsistent snapshot {}", path.display()))?;

    debug!(
        path = %path.display(),
        state = %snapshot.state(),
        matches = snapshot.matches().len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

pub fn parse_snapshot(source: &str, format: SnapshotFormat) -> Result<PromptSnapshotBuilder> {
    let builder = match format {
        SnapshotFormat::Json => serde_json::from_str(source)?,
        SnapshotFormat::Toml => toml::from_str(source)?,
    };
    Ok(builder)
}

fn format_from_extension(path: &Path) -> Result<SnapshotFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(SnapshotFormat::Json),
        Some("toml") => Ok(SnapshotFormat::Toml),
        Some(other) => bail!("Unknown snapshot extension '.{other}'; pass --format"),
        None => bail!("Snapshot {} has no extension; pass --format", path.display()),
    }
}
