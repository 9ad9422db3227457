use std::path::PathBuf;

/// Reasons a [`PromptSnapshot`](crate::PromptSnapshot) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("scroll window must show at least one candidate")]
    EmptyScrollWindow,

    #[error("highlighted index {index} is out of range for {len} matches")]
    HighlightOutOfRange { index: usize, len: usize },

    #[error("first visible index {index} is past the end of {len} matches")]
    FirstVisibleOutOfRange { index: usize, len: usize },

    #[error("cursor position {cursor} is past the end of a {len}-character value")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("prompt is in the error state but has no error message")]
    MissingErrorText,

    #[error("error message given for a prompt in the `{0}` state")]
    UnexpectedErrorText(&'static str),
}

/// Errors loading a [`ThemeTokens`](crate::ThemeTokens) file.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("theme glyph `{name}` must be exactly one terminal column wide, got {value:?}")]
    GlyphWidth { name: &'static str, value: String },
}
