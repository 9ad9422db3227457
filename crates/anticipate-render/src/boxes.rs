use anticipate_style::ansi::{longest, pad, visible_width};
use anticipate_style::{Painter, Style};

/// Draws the bordered box that frames a prompt.
///
/// ```text
///  ┌ Title ─────────┐
///  │ body line      │
///  ├────────────────┤
///  │ footer line    │
///  └────────────────┘
/// ```
///
/// Only the border characters take the border style; title and contents are
/// inserted as-is so they keep whatever styling they already carry. The
/// footer section is omitted when the footer has no non-empty lines.
pub struct BoxDrawer<'a> {
    painter: &'a dyn Painter,
    border: Style,
    min_width: usize,
}

impl<'a> BoxDrawer<'a> {
    pub fn new(painter: &'a dyn Painter, border: Style, min_width: usize) -> Self {
        Self {
            painter,
            border,
            min_width,
        }
    }

    pub fn draw(&self, title: &str, body: &str, footer: &str) -> String {
        let body_lines: Vec<&str> = body.split('\n').collect();
        let footer_lines: Vec<&str> = footer.split('\n').filter(|l| !l.is_empty()).collect();

        let width = longest(
            body_lines
                .iter()
                .chain(footer_lines.iter())
                .chain(std::iter::once(&title)),
            0,
            self.min_width,
        );

        let mut lines = Vec::with_capacity(body_lines.len() + footer_lines.len() + 3);
        lines.push(self.top(title, width));
        lines.extend(body_lines.iter().map(|line| self.row(line, width)));
        if !footer_lines.is_empty() {
            lines.push(self.rule('├', '┤', width));
            lines.extend(footer_lines.iter().map(|line| self.row(line, width)));
        }
        lines.push(self.rule('└', '┘', width));

        lines.join("\n")
    }

    fn paint(&self, text: &str) -> String {
        self.painter.paint(text, self.border)
    }

    fn top(&self, title: &str, width: usize) -> String {
        let title_width = visible_width(title);
        if title_width == 0 {
            return self.rule('┌', '┐', width);
        }

        let rest = "─".repeat(width - title_width);
        format!(
            "{} {} {}",
            self.paint(" ┌"),
            title,
            self.paint(&format!("{}┐", rest))
        )
    }

    fn row(&self, line: &str, width: usize) -> String {
        format!(
            "{} {} {}",
            self.paint(" │"),
            pad(line, width),
            self.paint("│")
        )
    }

    fn rule(&self, left: char, right: char, width: usize) -> String {
        self.paint(&format!(" {}{}{}", left, "─".repeat(width + 2), right))
    }
}
