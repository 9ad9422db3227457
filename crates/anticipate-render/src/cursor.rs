//! Cursor decoration for the typed value.
//!
//! The character under the cursor is drawn in inverse video (a space when the
//! cursor sits past the end). Values wider than the available columns are
//! scrolled horizontally around the cursor, with a dim ellipsis marking each
//! side that was cut.

use crate::palette::Palette;
use crate::snapshot::PromptSnapshot;
use anticipate_style::ansi::{truncate_start_to_width, truncate_to_width};
use anticipate_style::Style;
use unicode_width::UnicodeWidthStr;

/// The value line as it appears while the prompt is being edited.
///
/// - a highlighted candidate is shown without a cursor (the dimmed
///   placeholder if that candidate is empty)
/// - nothing typed: the dimmed placeholder with the cursor on its first column
/// - otherwise the typed text with the cursor at its position
pub fn value_with_cursor(palette: &Palette<'_>, snapshot: &PromptSnapshot) -> String {
    let max_width = palette.theme().value_max_width;
    let ellipsis = palette.theme().glyphs.ellipsis;

    if snapshot.highlighted().is_some() {
        let value = snapshot.value();
        return if value.is_empty() {
            palette.dim(&truncate(snapshot.placeholder(), max_width, ellipsis))
        } else {
            truncate(value, max_width, ellipsis)
        };
    }

    let typed = snapshot.typed();
    if typed.is_empty() {
        let dim = palette.theme().dim_style();
        return add_cursor(palette, snapshot.placeholder(), 0, max_width, dim);
    }

    add_cursor(palette, &typed.text, typed.cursor, max_width, Style::new())
}

/// Draw `value` with an inverse-video cursor at char index `cursor`, fitted to
/// `max_width` columns. `base` styles the text on either side of the cursor.
pub fn add_cursor(
    palette: &Palette<'_>,
    value: &str,
    cursor: usize,
    max_width: usize,
    base: Style,
) -> String {
    let split = value
        .char_indices()
        .nth(cursor)
        .map_or(value.len(), |(idx, _)| idx);
    let (before, rest) = value.split_at(split);
    let mut rest_chars = rest.chars();
    let current = rest_chars.next();
    let after = rest_chars.as_str();

    let mut buf = [0u8; 4];
    let under_cursor: &str = match current {
        Some(c) => c.encode_utf8(&mut buf),
        None => " ",
    };
    let cursor_width = under_cursor.width();

    let reserve_after = usize::from(!after.is_empty());
    let space_before = max_width.saturating_sub(cursor_width + reserve_after);
    let (before, cut_before) = if before.width() > space_before {
        (truncate_start_to_width(before, space_before.saturating_sub(1)), true)
    } else {
        (before, false)
    };

    let space_after = max_width
        .saturating_sub(usize::from(cut_before) + before.width() + cursor_width);
    let (after, cut_after) = if after.width() > space_after {
        (truncate_to_width(after, space_after.saturating_sub(1)), true)
    } else {
        (after, false)
    };

    let theme = palette.theme();
    let ellipsis = theme.glyphs.ellipsis;
    let dim = theme.dim_style();

    let mut out = String::new();
    if cut_before {
        out.push_str(&palette.glyph(ellipsis, dim));
    }
    out.push_str(&palette.paint(before, base));
    out.push_str(&palette.paint(under_cursor, theme.cursor_style(base)));
    out.push_str(&palette.paint(after, base));
    if cut_after {
        out.push_str(&palette.glyph(ellipsis, dim));
    }
    out
}

/// Cut `text` to `width` columns, ending in `ellipsis` when anything was cut.
pub fn truncate(text: &str, width: usize, ellipsis: char) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = truncate_to_width(text, width.saturating_sub(1)).to_string();
    out.push(ellipsis);
    out
}
