//! anticipate CLI library
//!
//! Renders prompt frames outside of a running prompt: from snapshot files
//! captured while debugging a controller, or from the built-in demo script.

pub mod cli;
pub mod commands;
pub mod context;
