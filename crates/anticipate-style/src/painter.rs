use crate::style::Style;

/// Applies a [`Style`] to a run of text.
///
/// Renderers take a `&dyn Painter` so the same layout code can emit ANSI for
/// a terminal or bare text for `NO_COLOR`, pipes and tests.
pub trait Painter: Send + Sync {
    fn paint(&self, text: &str, style: Style) -> String;
}

/// Emits SGR escape sequences, resetting after every styled run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, text: &str, style: Style) -> String {
        if style.is_plain() || text.is_empty() {
            text.to_string()
        } else {
            format!("{}{}\x1b[0m", style.to_ansi_codes(), text)
        }
    }
}

/// Drops all styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

/// Pick a painter for the current environment.
///
/// `NO_COLOR` (any non-empty value) forces plain output.
pub fn painter_for_env(force_plain: bool) -> &'static dyn Painter {
    static ANSI: AnsiPainter = AnsiPainter;
    static PLAIN: PlainPainter = PlainPainter;

    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if force_plain || no_color {
        &PLAIN
    } else {
        &ANSI
    }
}
