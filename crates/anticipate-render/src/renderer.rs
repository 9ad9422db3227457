//! Frame rendering for the anticipate prompt.
//!
//! One frame is a pure function of a [`PromptSnapshot`]: the same snapshot
//! always renders to the same string, and nothing is remembered between
//! frames.

use crate::boxes::BoxDrawer;
use crate::cursor::value_with_cursor;
use crate::palette::Palette;
use crate::scroll::thumb_row;
use crate::snapshot::{PromptSnapshot, PromptState};
use crate::theme::ThemeTokens;
use anticipate_style::ansi::{longest, pad, replace_trailing_space};
use anticipate_style::{AnsiPainter, Painter, Style};
use tracing::trace;

pub struct FrameRenderer<'a> {
    palette: Palette<'a>,
}

impl<'a> FrameRenderer<'a> {
    pub fn new(painter: &'a dyn Painter, theme: &'a ThemeTokens) -> Self {
        Self {
            palette: Palette::new(painter, theme),
        }
    }

    pub fn palette(&self) -> &Palette<'a> {
        &self.palette
    }

    /// Render the whole frame for `snapshot`.
    ///
    /// The frame opens with a blank line and ends with a newline; the caller
    /// writes it to the terminal as-is.
    pub fn render(&self, snapshot: &PromptSnapshot) -> String {
        debug_assert!(
            snapshot.check_invariants().is_ok(),
            "malformed prompt snapshot: {:?}",
            snapshot.check_invariants()
        );
        trace!(
            state = %snapshot.state(),
            matches = snapshot.matches().len(),
            visible = snapshot.scrolled_matches().len(),
            highlighted = ?snapshot.highlighted(),
            "rendering anticipate frame"
        );

        let p = &self.palette;
        let theme = p.theme();
        let warning = theme.glyphs.warning;

        match snapshot.state() {
            PromptState::Error => {
                let body = value_with_cursor(p, snapshot);
                let frame = self
                    .boxed(theme.warning_style())
                    .draw(snapshot.message(), &body, "");
                let error = snapshot.error().unwrap_or_default();
                let line = p.warning(&format!("  {} {}", warning, error));
                frame_lines(&[frame.as_str(), line.as_str()])
            }

            PromptState::Submit => {
                let frame = self.boxed(theme.muted_style()).draw(
                    &p.dim(snapshot.message()),
                    &p.dim(snapshot.value()),
                    "",
                );
                frame_lines(&[frame.as_str()])
            }

            PromptState::Cancel => {
                let value = match snapshot.value() {
                    "" => snapshot.placeholder(),
                    value => value,
                };
                let frame = self.boxed(theme.danger_style()).draw(
                    snapshot.message(),
                    &p.cancelled(value),
                    "",
                );
                let line = p.danger(&format!("  {} Cancelled.", warning));
                frame_lines(&[frame.as_str(), line.as_str()])
            }

            PromptState::Initial | PromptState::Active => {
                let frame = self.boxed(theme.muted_style()).draw(
                    &p.emphasis(snapshot.message()),
                    &self.value_with_cursor_and_arrow(snapshot),
                    &self.render_options(snapshot),
                );
                frame_lines(&[frame.as_str(), self.spacer(snapshot).as_str()])
            }
        }
    }

    /// The value line, with a dropdown chevron in the last column until the
    /// user types or moves into the list.
    pub fn value_with_cursor_and_arrow(&self, snapshot: &PromptSnapshot) -> String {
        let value = value_with_cursor(&self.palette, snapshot);
        if snapshot.is_engaged() {
            return value;
        }

        let theme = self.palette.theme();
        let width = longest(snapshot.matches(), 2, theme.min_width);
        let chevron = self
            .palette
            .glyph(theme.glyphs.chevron, theme.emphasis_style());
        replace_trailing_space(&pad(&format!("{}  ", value), width), &chevron)
    }

    /// Blank lines reserving room for the candidate list, so the frame does
    /// not jump when the list first appears.
    pub fn spacer(&self, snapshot: &PromptSnapshot) -> String {
        if snapshot.is_engaged() {
            String::new()
        } else {
            "\n".repeat(snapshot.scroll() + 1)
        }
    }

    /// The visible candidates, one per line, with a scrollbar in the last
    /// column when the list overflows the scroll window.
    ///
    /// Empty until the user engages the prompt.
    pub fn render_options(&self, snapshot: &PromptSnapshot) -> String {
        let visible = snapshot.scrolled_matches();
        if visible.is_empty() || !snapshot.is_engaged() {
            return String::new();
        }

        let p = &self.palette;
        let theme = p.theme();
        let width = longest(snapshot.matches(), 4, theme.min_width);
        let first = snapshot.first_visible();

        let lines: Vec<String> = visible
            .iter()
            .enumerate()
            .map(|(row, label)| {
                let line = if snapshot.highlighted() == Some(first + row) {
                    let pointer = p.glyph(theme.glyphs.pointer, theme.emphasis_style());
                    format!("{} {}  ", pointer, label)
                } else {
                    format!("  {}  ", p.dim(label))
                };
                pad(&line, width)
            })
            .collect();

        if !snapshot.is_scrollable() {
            return lines.join("\n");
        }

        let thumb = self.scroll_position(snapshot);
        let thumb_glyph = p.glyph(theme.glyphs.thumb, theme.emphasis_style());
        let track_glyph = p.glyph(theme.glyphs.track, theme.muted_style());

        lines
            .iter()
            .enumerate()
            .map(|(row, line)| {
                let glyph = if row == thumb {
                    &thumb_glyph
                } else {
                    &track_glyph
                };
                replace_trailing_space(line, glyph)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Visible row holding the scrollbar thumb; 0 when the list fits the
    /// window and no scrollbar is drawn.
    pub fn scroll_position(&self, snapshot: &PromptSnapshot) -> usize {
        if !snapshot.is_scrollable() {
            return 0;
        }
        thumb_row(
            snapshot.highlighted(),
            snapshot.scroll(),
            snapshot.matches().len(),
            snapshot.scrolled_matches().len(),
        )
    }

    fn boxed(&self, border: Style) -> BoxDrawer<'a> {
        BoxDrawer::new(
            self.palette.painter(),
            border,
            self.palette.theme().min_width,
        )
    }
}

impl Default for FrameRenderer<'static> {
    fn default() -> Self {
        static ANSI: AnsiPainter = AnsiPainter;
        Self::new(&ANSI, ThemeTokens::default_ref())
    }
}

fn frame_lines(lines: &[&str]) -> String {
    format!("\n{}\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{PromptSnapshotBuilder, TypedValue};
    use anticipate_style::ansi::{strip_ansi, visible_width};
    use anticipate_style::PlainPainter;

    fn compact_theme() -> ThemeTokens {
        ThemeTokens {
            min_width: 0,
            ..ThemeTokens::default()
        }
    }

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    fn colors() -> PromptSnapshotBuilder {
        PromptSnapshot::builder("Color")
            .matches(["red", "green", "blue"])
            .scroll(5)
    }

    #[test]
    fn idle_prompt_matches_expected_frame() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = colors().build().unwrap();

        let expected = format!(
            "\n{}\n{}\n{}\n{}",
            " ┌ Color ──┐",
            " │       ⌄ │",
            " └─────────┘",
            "\n".repeat(7),
        );
        assert_eq!(renderer.render(&snapshot), expected);
    }

    #[test]
    fn engaged_prompt_lists_candidates() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = colors()
            .text("r")
            .state(PromptState::Active)
            .highlighted(Some(1))
            .build()
            .unwrap();

        let expected = [
            "",
            " ┌ Color ────┐",
            " │ green     │",
            " ├───────────┤",
            " │   red     │",
            " │ › green   │",
            " │   blue    │",
            " └───────────┘",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(renderer.render(&snapshot), expected);
    }

    #[test]
    fn error_frame_adds_warning_line() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = PromptSnapshot::builder("Name")
            .text("x")
            .error("Too short.")
            .build()
            .unwrap();

        let frame = renderer.render(&snapshot);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[1], " ┌ Name ┐");
        assert_eq!(lines[2], " │ x    │");
        assert_eq!(lines[4], "  ⚠ Too short.");
        assert!(frame.ends_with("Too short.\n"));
    }

    #[test]
    fn error_frame_is_yellow() {
        let renderer = FrameRenderer::default();
        let snapshot = PromptSnapshot::builder("Name")
            .error("Required.")
            .build()
            .unwrap();

        let frame = renderer.render(&snapshot);
        assert!(frame.contains("\x1b[33m ┌\x1b[0m"));
        assert!(frame.contains("\x1b[33m  ⚠ Required.\x1b[0m"));
    }

    #[test]
    fn submit_frame_is_dimmed_without_cursor_or_list() {
        let renderer = FrameRenderer::default();
        let snapshot = colors()
            .text("gr")
            .highlighted(Some(1))
            .state(PromptState::Submit)
            .build()
            .unwrap();

        let frame = renderer.render(&snapshot);
        assert!(frame.contains("\x1b[2mgreen\x1b[0m"));
        assert!(frame.contains("\x1b[2mColor\x1b[0m"));
        assert!(!frame.contains("\x1b[7m"), "no cursor on submit");
        assert!(!frame.contains('├'), "no candidate list on submit");
        assert!(!strip_ansi(&frame).contains("blue"));
    }

    #[test]
    fn cancel_frame_strikes_placeholder_when_empty() {
        let renderer = FrameRenderer::default();
        let snapshot = colors()
            .placeholder("E.g. red")
            .state(PromptState::Cancel)
            .build()
            .unwrap();

        let frame = renderer.render(&snapshot);
        assert!(frame.contains("\x1b[2;9mE.g. red\x1b[0m"));
        assert!(frame.contains("\x1b[31m  ⚠ Cancelled.\x1b[0m"));
        assert!(frame.contains("\x1b[31m ┌\x1b[0m"));
    }

    #[test]
    fn cancel_frame_prefers_typed_value() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = colors()
            .text("teal")
            .placeholder("E.g. red")
            .state(PromptState::Cancel)
            .build()
            .unwrap();

        let frame = renderer.render(&snapshot);
        assert!(frame.contains("teal"));
        assert!(!frame.contains("E.g. red"));
    }

    #[test]
    fn options_hidden_until_engaged() {
        let renderer = FrameRenderer::default();
        let snapshot = PromptSnapshot::builder("Pick")
            .matches(numbered(20))
            .build()
            .unwrap();
        assert_eq!(renderer.render_options(&snapshot), "");
    }

    #[test]
    fn empty_matches_render_nothing_and_reserve_space() {
        let renderer = FrameRenderer::default();
        let snapshot = PromptSnapshot::builder("Pick")
            .state(PromptState::Active)
            .scroll(4)
            .build()
            .unwrap();

        assert_eq!(renderer.render_options(&snapshot), "");
        assert_eq!(renderer.spacer(&snapshot), "\n".repeat(5));
    }

    #[test]
    fn spacer_collapses_once_engaged() {
        let renderer = FrameRenderer::default();
        let snapshot = colors().text("b").build().unwrap();
        assert_eq!(renderer.spacer(&snapshot), "");
    }

    #[test]
    fn chevron_sits_in_last_option_column() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = PromptSnapshot::builder("Pick")
            .matches(["abcdef"])
            .build()
            .unwrap();

        let value = renderer.value_with_cursor_and_arrow(&snapshot);
        assert_eq!(value, "       ⌄");
        assert_eq!(visible_width(&value), 8);
    }

    #[test]
    fn chevron_with_no_matches_follows_cursor() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = PromptSnapshot::builder("Pick").build().unwrap();
        assert_eq!(renderer.value_with_cursor_and_arrow(&snapshot), "  ⌄");
    }

    #[test]
    fn engaged_value_has_no_chevron() {
        let renderer = FrameRenderer::default();
        let snapshot = colors()
            .typed(TypedValue::with_cursor("gre", 3))
            .build()
            .unwrap();
        assert!(!renderer.value_with_cursor_and_arrow(&snapshot).contains('⌄'));
    }

    #[test]
    fn scrollbar_marks_thumb_and_track() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = PromptSnapshot::builder("Pick")
            .matches(numbered(10))
            .scroll(5)
            .highlighted(Some(7))
            .follow_highlight()
            .build()
            .unwrap();

        let options = renderer.render_options(&snapshot);
        let lines: Vec<&str> = options.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  item-3 │");
        assert_eq!(lines[2], "  item-5 ┃");
        assert_eq!(lines[4], "› item-7 │");
        assert!(lines.iter().all(|l| visible_width(l) == 10));
    }

    #[test]
    fn no_scrollbar_when_everything_fits() {
        let theme = compact_theme();
        let renderer = FrameRenderer::new(&PlainPainter, &theme);
        let snapshot = colors().text("e").build().unwrap();

        let options = renderer.render_options(&snapshot);
        assert!(!options.contains('│'));
        assert!(!options.contains('┃'));
    }

    #[test]
    fn scrollbar_is_colored_by_role() {
        let renderer = FrameRenderer::default();
        let snapshot = PromptSnapshot::builder("Pick")
            .matches(numbered(8))
            .scroll(3)
            .highlighted(Some(0))
            .build()
            .unwrap();

        let options = renderer.render_options(&snapshot);
        let lines: Vec<&str> = options.lines().collect();
        assert!(lines[0].ends_with("\x1b[36m┃\x1b[0m"));
        assert!(lines[1].ends_with("\x1b[90m│\x1b[0m"));
    }

    #[test]
    fn default_theme_aligns_everything_to_min_width() {
        let renderer = FrameRenderer::default();
        let snapshot = colors().text("r").highlighted(Some(0)).build().unwrap();

        let frame = renderer.render(&snapshot);
        let widths: Vec<usize> = frame
            .lines()
            .filter(|l| !l.is_empty())
            .map(visible_width)
            .collect();
        assert!(widths.iter().all(|&w| w == 65), "{widths:?}");
    }
}
