//! Read-only view of an anticipate prompt at one redraw.
//!
//! The prompt controller owns keystrokes, matching and scrolling; before each
//! redraw it hands the renderer a [`PromptSnapshot`]. Snapshots are validated
//! on construction so the renderer can treat the invariants as given.

use crate::error::SnapshotError;
use crate::scroll;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Lifecycle stage of the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptState {
    #[default]
    Initial,
    Active,
    Error,
    Submit,
    Cancel,
}

impl PromptState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptState::Initial => "initial",
            PromptState::Active => "active",
            PromptState::Error => "error",
            PromptState::Submit => "submit",
            PromptState::Cancel => "cancel",
        }
    }
}

impl fmt::Display for PromptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw typed text and the cursor position within it, in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypedValue {
    pub text: String,
    pub cursor: usize,
}

impl TypedValue {
    /// Text with the cursor placed after the last character.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn with_cursor(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSnapshot {
    state: PromptState,
    message: String,
    typed: TypedValue,
    placeholder: String,
    error: Option<String>,
    matches: Vec<String>,
    highlighted: Option<usize>,
    scroll: usize,
    first_visible: usize,
}

impl PromptSnapshot {
    pub fn builder(message: impl Into<String>) -> PromptSnapshotBuilder {
        PromptSnapshotBuilder::new(message)
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn typed(&self) -> &TypedValue {
        &self.typed
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Validation message; only present in [`PromptState::Error`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Scroll window size: the most candidates shown at once.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Global indices of the visible candidates.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.first_visible + self.scroll).min(self.matches.len());
        self.first_visible.min(end)..end
    }

    /// The contiguous window of `matches` currently on screen.
    pub fn scrolled_matches(&self) -> &[String] {
        &self.matches[self.visible_range()]
    }

    /// The value the prompt would submit: the highlighted candidate if any,
    /// otherwise the typed text.
    pub fn value(&self) -> &str {
        match self.highlighted {
            Some(index) => &self.matches[index],
            None => &self.typed.text,
        }
    }

    /// The user has typed something or moved into the candidate list.
    pub fn is_engaged(&self) -> bool {
        self.highlighted.is_some() || !self.typed.is_empty()
    }

    /// More candidates exist than fit in the scroll window.
    pub fn is_scrollable(&self) -> bool {
        self.matches.len() > self.scroll
    }

    pub(crate) fn check_invariants(&self) -> Result<(), SnapshotError> {
        let len = self.matches.len();
        if self.scroll == 0 {
            return Err(SnapshotError::EmptyScrollWindow);
        }
        if let Some(index) = self.highlighted {
            if index >= len {
                return Err(SnapshotError::HighlightOutOfRange { index, len });
            }
        }
        if self.first_visible > len {
            return Err(SnapshotError::FirstVisibleOutOfRange {
                index: self.first_visible,
                len,
            });
        }
        let chars = self.typed.char_len();
        if self.typed.cursor > chars {
            return Err(SnapshotError::CursorOutOfRange {
                cursor: self.typed.cursor,
                len: chars,
            });
        }
        match (self.state, &self.error) {
            (PromptState::Error, None) => Err(SnapshotError::MissingErrorText),
            (PromptState::Error, Some(_)) | (_, None) => Ok(()),
            (state, Some(_)) => Err(SnapshotError::UnexpectedErrorText(state.as_str())),
        }
    }
}

/// Builder for [`PromptSnapshot`]; also the on-disk snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptSnapshotBuilder {
    state: PromptState,
    message: String,
    typed: TypedValue,
    placeholder: String,
    error: Option<String>,
    matches: Vec<String>,
    highlighted: Option<usize>,
    scroll: usize,
    first_visible: usize,
    follow_highlight: bool,
}

impl Default for PromptSnapshotBuilder {
    fn default() -> Self {
        Self {
            state: PromptState::default(),
            message: String::new(),
            typed: TypedValue::default(),
            placeholder: String::new(),
            error: None,
            matches: Vec::new(),
            highlighted: None,
            scroll: 5,
            first_visible: 0,
            follow_highlight: false,
        }
    }
}

impl PromptSnapshotBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(mut self, state: PromptState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn typed(mut self, typed: TypedValue) -> Self {
        self.typed = typed;
        self
    }

    /// Shorthand for [`typed`](Self::typed) with the cursor at the end.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.typed(TypedValue::new(text))
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set a validation message and move into the error state.
    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.state = PromptState::Error;
        self.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn matches<I, S>(mut self, matches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matches = matches.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn highlighted(mut self, highlighted: Option<usize>) -> Self {
        self.highlighted = highlighted;
        self
    }

    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub fn first_visible(mut self, first_visible: usize) -> Self {
        self.first_visible = first_visible;
        self
    }

    /// Move the scroll window so the highlighted candidate is visible.
    #[must_use]
    pub fn follow_highlight(mut self) -> Self {
        self.follow_highlight = true;
        self
    }

    pub fn build(self) -> Result<PromptSnapshot, SnapshotError> {
        let first_visible = match (self.follow_highlight, self.highlighted) {
            (true, Some(highlighted)) if self.scroll > 0 => {
                scroll::follow(self.first_visible, highlighted, self.scroll)
            }
            _ => self.first_visible,
        };

        let snapshot = PromptSnapshot {
            state: self.state,
            message: self.message,
            typed: self.typed,
            placeholder: self.placeholder,
            error: self.error,
            matches: self.matches,
            highlighted: self.highlighted,
            scroll: self.scroll,
            first_visible,
        };
        snapshot.check_invariants()?;
        Ok(snapshot)
    }
}
