//! Frame rendering for anticipate (autocomplete-with-suggestions) prompts.
//!
//! The prompt controller hands a [`PromptSnapshot`] to a [`FrameRenderer`]
//! before every redraw and writes the returned string to the terminal:
//!
//! ```text
//! keystroke -> controller -> PromptSnapshot -> FrameRenderer::render -> String -> terminal
//! ```
//!
//! Rendering is pure: no I/O, no state carried between frames. Colors and
//! glyphs come from [`ThemeTokens`]; whether they turn into escape sequences
//! is up to the injected [`Painter`](anticipate_style::Painter).
//!
//! ```rust
//! use anticipate_render::{FrameRenderer, PromptSnapshot, ThemeTokens};
//! use anticipate_style::PlainPainter;
//!
//! let snapshot = PromptSnapshot::builder("What is your favourite color?")
//!     .text("bl")
//!     .matches(["black", "blue"])
//!     .highlighted(Some(1))
//!     .build()
//!     .unwrap();
//!
//! let renderer = FrameRenderer::new(&PlainPainter, ThemeTokens::default_ref());
//! let frame = renderer.render(&snapshot);
//! assert!(frame.contains("› blue"));
//! ```

mod boxes;
mod cursor;
mod error;
mod palette;
mod renderer;
pub mod scroll;
mod snapshot;
mod theme;

pub use boxes::BoxDrawer;
pub use cursor::{add_cursor, truncate, value_with_cursor};
pub use error::{SnapshotError, ThemeError};
pub use palette::Palette;
pub use renderer::FrameRenderer;
pub use snapshot::{PromptSnapshot, PromptSnapshotBuilder, PromptState, TypedValue};
pub use theme::{Glyphs, ThemeTokens};
