use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terminal foreground color.
///
/// Named colors map onto the 16-color SGR palette so frames stay readable on
/// terminals without truecolor support. Parsed from theme files as a lowercase
/// name (`"cyan"`, `"dark_gray"`) or a `#rrggbb` hex triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    White,
    Rgb(u8, u8, u8),
}

impl Color {
    fn fg_code(self) -> String {
        match self {
            Color::Black => "30".to_string(),
            Color::Red => "31".to_string(),
            Color::Green => "32".to_string(),
            Color::Yellow => "33".to_string(),
            Color::Blue => "34".to_string(),
            Color::Magenta => "35".to_string(),
            Color::Cyan => "36".to_string(),
            Color::Gray => "37".to_string(),
            Color::DarkGray => "90".to_string(),
            Color::White => "97".to_string(),
            Color::Rgb(r, g, b) => format!("38;2;{};{};{}", r, g, b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color `{0}` (expected a color name or #rrggbb)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(&['-', ' '][..], "_");
        let color = match normalized.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "dark_gray" | "dark_grey" => Color::DarkGray,
            "white" => Color::White,
            hex if hex.starts_with('#') => {
                parse_hex(hex).ok_or_else(|| ParseColorError(s.to_string()))?
            }
            _ => return Err(ParseColorError(s.to_string())),
        };
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::Red => f.write_str("red"),
            Color::Green => f.write_str("green"),
            Color::Yellow => f.write_str("yellow"),
            Color::Blue => f.write_str("blue"),
            Color::Magenta => f.write_str("magenta"),
            Color::Cyan => f.write_str("cyan"),
            Color::Gray => f.write_str("gray"),
            Color::DarkGray => f.write_str("dark_gray"),
            Color::White => f.write_str("white"),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Text attributes applied to a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub dim: bool,
    pub strikethrough: bool,
    pub inverse: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            dim: false,
            strikethrough: false,
            inverse: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    #[must_use]
    pub const fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    #[must_use]
    pub const fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// SGR sequence selecting this style, e.g. `\x1b[2;36m`.
    ///
    /// Returns an empty string for the plain style.
    pub fn to_ansi_codes(&self) -> String {
        let mut codes: Vec<String> = Vec::new();
        if self.dim {
            codes.push("2".into());
        }
        if self.inverse {
            codes.push("7".into());
        }
        if self.strikethrough {
            codes.push("9".into());
        }
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code());
        }

        if codes.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", codes.join(";"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("cyan", Color::Cyan)]
    #[test_case("Dark-Gray", Color::DarkGray)]
    #[test_case("grey", Color::Gray)]
    #[test_case("#ff8000", Color::Rgb(255, 128, 0))]
    fn parses_color_names(input: &str, expected: Color) {
        assert_eq!(input.parse::<Color>().unwrap(), expected);
    }

    #[test_case("chartreuse")]
    #[test_case("#12345")]
    #[test_case("#gg0000")]
    fn rejects_unknown_colors(input: &str) {
        assert!(input.parse::<Color>().is_err());
    }

    #[test]
    fn color_display_round_trips_through_parse() {
        for color in [Color::DarkGray, Color::Rgb(1, 2, 3), Color::Yellow] {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn plain_style_has_no_codes() {
        assert!(Style::new().is_plain());
        assert_eq!(Style::new().to_ansi_codes(), "");
    }

    #[test]
    fn combined_attributes_share_one_sequence() {
        let style = Style::new().dim().strikethrough().fg(Color::Red);
        assert_eq!(style.to_ansi_codes(), "\x1b[2;9;31m");
    }

    #[test]
    fn rgb_uses_truecolor_code() {
        let style = Style::new().fg(Color::Rgb(10, 20, 30));
        assert_eq!(style.to_ansi_codes(), "\x1b[38;2;10;20;30m");
    }
}
