use anyhow::{Context as _, Result};
use anticipate_render::{FrameRenderer, ThemeTokens};
use anticipate_style::{painter_for_env, AnsiPainter, Painter, PlainPainter};
use crossterm::tty::IsTty;
use std::path::Path;
use tracing::debug;

use crate::cli::{Cli, ColorChoice};

/// Painter and theme shared by every command.
pub struct RenderContext {
    painter: &'static dyn Painter,
    theme: ThemeTokens,
}

impl RenderContext {
    pub fn new(painter: &'static dyn Painter, theme: ThemeTokens) -> Self {
        Self { painter, theme }
    }

    /// Resolve the theme file, color choice and terminal width from the
    /// global flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let theme = load_theme(cli.theme.as_deref())?;
        let theme = match terminal_columns(cli.width) {
            Some(columns) => theme.fit_to_terminal(columns),
            None => theme,
        };
        Ok(Self::new(select_painter(cli.color), theme))
    }

    pub fn theme(&self) -> &ThemeTokens {
        &self.theme
    }

    pub fn renderer(&self) -> FrameRenderer<'_> {
        FrameRenderer::new(self.painter, &self.theme)
    }
}

fn load_theme(path: Option<&Path>) -> Result<ThemeTokens> {
    match path {
        Some(path) => ThemeTokens::load(path)
            .with_context(|| format!("Failed to load theme from {}", path.display())),
        None => Ok(ThemeTokens::default()),
    }
}

fn select_painter(choice: ColorChoice) -> &'static dyn Painter {
    static ANSI: AnsiPainter = AnsiPainter;
    static PLAIN: PlainPainter = PlainPainter;

    match choice {
        ColorChoice::Always => &ANSI,
        ColorChoice::Never => &PLAIN,
        ColorChoice::Auto => painter_for_env(!std::io::stdout().is_tty()),
    }
}

fn terminal_columns(requested: Option<u16>) -> Option<usize> {
    if let Some(columns) = requested {
        return Some(usize::from(columns));
    }
    match crossterm::terminal::size() {
        Ok((columns, _rows)) => Some(usize::from(columns)),
        Err(err) => {
            debug!(error = %err, "terminal size unavailable, keeping theme widths");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_width_caps_min_width() {
        let cli = <Cli as clap::Parser>::parse_from(["anticipate", "--width", "40", "theme"]);
        let ctx = RenderContext::from_cli(&cli).unwrap();
        assert_eq!(ctx.theme().min_width, 34);
    }

    #[test]
    fn theme_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_width = 20\n\n[glyphs]\npointer = \">\"").unwrap();

        let theme = load_theme(Some(file.path())).unwrap();
        assert_eq!(theme.min_width, 20);
        assert_eq!(theme.glyphs.pointer, '>');
    }

    #[test]
    fn missing_theme_file_names_the_path() {
        let err = load_theme(Some(Path::new("/nonexistent/theme.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/theme.toml"));
    }

    #[test]
    fn never_paints_plain() {
        let ctx = RenderContext::new(select_painter(ColorChoice::Never), ThemeTokens::default());
        let snapshot = anticipate_render::PromptSnapshot::builder("Pick")
            .build()
            .unwrap();
        assert!(!ctx.renderer().render(&snapshot).contains('\x1b'));
    }
}
