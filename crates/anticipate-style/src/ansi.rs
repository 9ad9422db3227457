//! Width arithmetic over strings that may carry ANSI escape sequences.
//!
//! Every width here is measured in terminal columns of the *visible* text:
//! escape sequences count as zero and wide glyphs (CJK, most emoji) count as
//! two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Remove CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL|ST`) sequences.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('[') => {
                chars.next();
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' {
                        if chars.peek() == Some(&'\\') {
                            chars.next();
                        }
                        break;
                    }
                }
            }
            Some(_) => {
                chars.next();
            }
            None => {}
        }
    }

    out
}

/// Terminal columns occupied by `s` once escape sequences are removed.
pub fn visible_width(s: &str) -> usize {
    if !s.contains('\x1b') {
        return s.width();
    }
    strip_ansi(s).width()
}

/// Right-pad `text` with spaces to `width` visible columns.
///
/// Text that is already wider is returned unchanged, never truncated.
pub fn pad(text: &str, width: usize) -> String {
    let current = visible_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(current));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    out
}

/// Widest visible line plus `padding`, never less than `min_width`.
///
/// An empty sequence yields `min_width`.
pub fn longest<I, S>(lines: I, padding: usize, min_width: usize) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| visible_width(line.as_ref()) + padding)
        .fold(min_width, usize::max)
}

/// Swap the final character of `line` for `glyph` when it is whitespace.
///
/// Used on lines that were padded to a fixed width so the glyph lands in the
/// last column. Lines not ending in whitespace come back unchanged.
pub fn replace_trailing_space(line: &str, glyph: &str) -> String {
    match line.chars().next_back() {
        Some(last) if last.is_whitespace() => {
            let mut out = String::with_capacity(line.len() + glyph.len());
            out.push_str(&line[..line.len() - last.len_utf8()]);
            out.push_str(glyph);
            out
        }
        _ => line.to_string(),
    }
}

/// Longest prefix of `s` that fits in `max_width` columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    if s.width() <= max_width {
        return s;
    }

    let mut width = 0;
    let mut end_idx = 0;

    for (idx, c) in s.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        end_idx = idx + c.len_utf8();
    }

    &s[..end_idx]
}

/// Longest suffix of `s` that fits in `max_width` columns.
pub fn truncate_start_to_width(s: &str, max_width: usize) -> &str {
    if s.width() <= max_width {
        return s;
    }

    let mut width = 0;
    let mut start_idx = s.len();

    for (idx, c) in s.char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        start_idx = idx;
    }

    &s[start_idx..]
}
