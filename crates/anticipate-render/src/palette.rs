use crate::theme::ThemeTokens;
use anticipate_style::{Painter, Style};

/// A painter bound to a theme, exposing the role helpers frames are drawn
/// with (`dim`, `emphasis`, `danger`, ...).
#[derive(Clone, Copy)]
pub struct Palette<'a> {
    painter: &'a dyn Painter,
    theme: &'a ThemeTokens,
}

impl<'a> Palette<'a> {
    pub fn new(painter: &'a dyn Painter, theme: &'a ThemeTokens) -> Self {
        Self { painter, theme }
    }

    pub fn painter(&self) -> &'a dyn Painter {
        self.painter
    }

    pub fn theme(&self) -> &'a ThemeTokens {
        self.theme
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        self.painter.paint(text, style)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, self.theme.dim_style())
    }

    pub fn emphasis(&self, text: &str) -> String {
        self.paint(text, self.theme.emphasis_style())
    }

    pub fn danger(&self, text: &str) -> String {
        self.paint(text, self.theme.danger_style())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, self.theme.warning_style())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.theme.muted_style())
    }

    /// Dimmed and struck through, for values of a cancelled prompt.
    pub fn cancelled(&self, text: &str) -> String {
        self.paint(text, self.theme.cancelled_style())
    }

    pub fn glyph(&self, glyph: char, style: Style) -> String {
        let mut buf = [0u8; 4];
        self.paint(glyph.encode_utf8(&mut buf), style)
    }
}

impl std::fmt::Debug for Palette<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette").field("theme", self.theme).finish_non_exhaustive()
    }
}
