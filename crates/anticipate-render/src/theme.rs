//! Theme tokens for prompt frames.
//!
//! `ThemeTokens` names colors by role rather than by hue, so the renderer asks
//! for "emphasis" or "danger" and a theme file decides what that looks like.
//! Every field has a default, so a theme file only lists what it overrides:
//!
//! ```toml
//! emphasis = "magenta"
//! min_width = 40
//!
//! [glyphs]
//! pointer = ">"
//! ```

use crate::error::ThemeError;
use anticipate_style::{Color, Style};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use unicode_width::UnicodeWidthChar;

/// Role colors, glyphs and width limits used when drawing a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeTokens {
    /// Focused message, selection pointer, dropdown chevron, scroll thumb
    pub emphasis: Color,
    /// Cancelled prompts
    pub danger: Color,
    /// Validation errors
    pub warning: Color,
    /// Box borders and the scrollbar track
    pub muted: Color,
    /// Minimum inner width of the prompt box
    pub min_width: usize,
    /// Columns available to the typed value before it is truncated
    pub value_max_width: usize,
    pub glyphs: Glyphs,
}

/// Single-column glyphs drawn into the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Glyphs {
    /// Marks the highlighted candidate
    pub pointer: char,
    /// "More options below", shown before the list is engaged
    pub chevron: char,
    /// Scrollbar thumb
    pub thumb: char,
    /// Scrollbar track
    pub track: char,
    /// Prefix of error and cancel lines
    pub warning: char,
    /// Marks truncated input
    pub ellipsis: char,
}

impl Glyphs {
    pub const fn default_glyphs() -> Self {
        Self {
            pointer: '›',
            chevron: '⌄',
            thumb: '┃',
            track: '│',
            warning: '⚠',
            ellipsis: '…',
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::default_glyphs()
    }
}

impl ThemeTokens {
    pub const fn default_tokens() -> Self {
        Self {
            emphasis: Color::Cyan,
            danger: Color::Red,
            warning: Color::Yellow,
            muted: Color::DarkGray,
            glyphs: Glyphs::default_glyphs(),
            min_width: 60,
            value_max_width: 62,
        }
    }

    /// Get a `&'static` reference to the default theme tokens.
    pub fn default_ref() -> &'static ThemeTokens {
        static DEFAULT: ThemeTokens = ThemeTokens::default_tokens();
        &DEFAULT
    }

    /// Parse a TOML theme, falling back to defaults for omitted fields.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let tokens: ThemeTokens = toml::from_str(source)?;
        tokens.validate()?;
        Ok(tokens)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), "loaded prompt theme");
        Ok(tokens)
    }

    /// Glyphs that overwrite a padded column must occupy exactly one column.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let g = &self.glyphs;
        for (name, glyph) in [
            ("pointer", g.pointer),
            ("chevron", g.chevron),
            ("thumb", g.thumb),
            ("track", g.track),
            ("ellipsis", g.ellipsis),
        ] {
            if glyph.width() != Some(1) {
                return Err(ThemeError::GlyphWidth {
                    name,
                    value: glyph.to_string(),
                });
            }
        }
        Ok(())
    }

    /// A copy with `min_width` capped so the box fits `columns`.
    ///
    /// The box adds a leading space, two borders and two inner spaces.
    #[must_use]
    pub fn fit_to_terminal(mut self, columns: usize) -> Self {
        self.min_width = self.min_width.min(columns.saturating_sub(6));
        self
    }

    // ── Style presets ───────────────────────────────────────────────────

    pub fn emphasis_style(&self) -> Style {
        Style::new().fg(self.emphasis)
    }

    pub fn danger_style(&self) -> Style {
        Style::new().fg(self.danger)
    }

    pub fn warning_style(&self) -> Style {
        Style::new().fg(self.warning)
    }

    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn dim_style(&self) -> Style {
        Style::new().dim()
    }

    pub fn cancelled_style(&self) -> Style {
        Style::new().dim().strikethrough()
    }

    /// The character under the cursor, drawn over the text's `base` style.
    pub fn cursor_style(&self, base: Style) -> Style {
        base.inverse()
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::default_tokens()
    }
}
