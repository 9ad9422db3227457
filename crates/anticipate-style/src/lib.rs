//! Styling primitives for anticipate prompt frames.
//!
//! - [`Color`] and [`Style`] describe how a run of text should look
//! - [`Painter`] turns a styled run into a string ([`AnsiPainter`] for
//!   terminals, [`PlainPainter`] for `NO_COLOR` and tests)
//! - [`ansi`] measures and pads strings that already carry escape sequences

pub mod ansi;
mod painter;
mod style;

pub use painter::{painter_for_env, AnsiPainter, Painter, PlainPainter};
pub use style::{Color, ParseColorError, Style};
