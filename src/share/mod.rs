//! Shareable result strings
//!
//! Encodes a completed session as a compact emoji grid, Wordle-style.

mod encoder;

pub use encoder::{DEFAULT_TITLE, DEFAULT_URL, ShareEncoder, ShareGlyphs};
