use anyhow::{Context, Result};
use anticipate_render::{PromptSnapshot, PromptState, SnapshotError};
use std::io::{self, Write};

use crate::context::RenderContext;

const MESSAGE: &str = "What is your favourite color?";
const PLACEHOLDER: &str = "E.g. blue";

const COLORS: [&str; 12] = [
    "black", "blue", "brown", "cyan", "gold", "gray", "green", "magenta", "orange", "purple",
    "red", "yellow",
];

pub fn execute(ctx: &RenderContext, scroll: usize) -> Result<()> {
    let frames = demo_snapshots(scroll).context("Failed to build demo frames")?;
    let renderer = ctx.renderer();

    let mut stdout = io::stdout().lock();
    for (label, snapshot) in &frames {
        let heading = renderer.palette().muted(&format!("# {label}"));
        write!(stdout, "{heading}{}", renderer.render(snapshot))?;
    }
    stdout.flush()?;
    Ok(())
}

/// One snapshot per step of a user picking a color from the list.
pub fn demo_snapshots(scroll: usize) -> Result<Vec<(&'static str, PromptSnapshot)>, SnapshotError> {
    let prompt = || {
        PromptSnapshot::builder(MESSAGE)
            .placeholder(PLACEHOLDER)
            .scroll(scroll)
    };

    Ok(vec![
        ("idle", prompt().matches(COLORS).build()?),
        (
            "browsing",
            prompt()
                .state(PromptState::Active)
                .matches(COLORS)
                .highlighted(Some(0))
                .build()?,
        ),
        (
            "scrolled",
            prompt()
                .state(PromptState::Active)
                .matches(COLORS)
                .highlighted(Some(COLORS.len() / 2))
                .follow_highlight()
                .build()?,
        ),
        (
            "typing",
            prompt()
                .state(PromptState::Active)
                .text("bl")
                .matches(filter("bl"))
                .build()?,
        ),
        (
            "picking",
            prompt()
                .state(PromptState::Active)
                .text("bl")
                .matches(filter("bl"))
                .highlighted(Some(1))
                .follow_highlight()
                .build()?,
        ),
        (
            "error",
            prompt()
                .text("teal")
                .matches(filter("teal"))
                .error("Pick a color from the list.")
                .build()?,
        ),
        (
            "submit",
            prompt()
                .state(PromptState::Submit)
                .text("bl")
                .matches(filter("bl"))
                .highlighted(Some(1))
                .follow_highlight()
                .build()?,
        ),
        (
            "cancel",
            prompt()
                .state(PromptState::Cancel)
                .text("bl")
                .matches(filter("bl"))
                .build()?,
        ),
    ])
}

fn filter(query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();
    COLORS
        .iter()
        .copied()
        .filter(|color| color.contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anticipate_render::{FrameRenderer, ThemeTokens};
    use anticipate_style::PlainPainter;

    #[test]
    fn every_state_is_covered() {
        let frames = demo_snapshots(5).unwrap();
        for state in [
            PromptState::Initial,
            PromptState::Active,
            PromptState::Error,
            PromptState::Submit,
            PromptState::Cancel,
        ] {
            assert!(
                frames.iter().any(|(_, s)| s.state() == state),
                "no demo frame in the {state} state"
            );
        }
    }

    #[test]
    fn submit_frame_shows_the_picked_color() {
        let frames = demo_snapshots(5).unwrap();
        let (_, submit) = frames.iter().find(|(label, _)| *label == "submit").unwrap();
        assert_eq!(submit.value(), "blue");

        let renderer = FrameRenderer::new(&PlainPainter, ThemeTokens::default_ref());
        assert!(renderer.render(submit).contains("blue"));
    }

    #[test]
    fn scrolled_frame_moves_the_thumb() {
        let frames = demo_snapshots(5).unwrap();
        let (_, scrolled) = frames.iter().find(|(label, _)| *label == "scrolled").unwrap();
        let renderer = FrameRenderer::new(&PlainPainter, ThemeTokens::default_ref());
        assert!(scrolled.first_visible() > 0);
        assert!(renderer.scroll_position(scrolled) > 0);
    }

    #[test]
    fn zero_scroll_is_rejected() {
        assert_eq!(
            demo_snapshots(0).unwrap_err(),
            SnapshotError::EmptyScrollWindow
        );
    }

    #[test]
    fn filter_matches_substrings() {
        assert_eq!(filter("bl"), ["black", "blue"]);
        assert!(filter("teal").is_empty());
    }
}
