//! JSON serialization for command-line input and output.
//!
//! Output is deterministic:
//! - Struct members sorted by name
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
