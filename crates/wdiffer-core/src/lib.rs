//! wdiffer Core - word-level diff engine
//!
//! This crate provides the building blocks of the `wdiffer` tool:
//! - Tokenization of text into words and newline tokens
//! - LCS-based diff engine with prefix/suffix trimming
//! - Marker configuration and rendering of the diff stream
//! - Structured error facility and logging facility
//!
//! The engine is a pure, synchronous computation. All I/O failures are
//! raised by the tokenizer's file helpers before the engine runs.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod render;
pub mod token;

// Re-export commonly used types
pub use diff::{compute_edits, compute_edits_with, diff, DiffOptions, DiffStats, Edit};
pub use errors::{ExError, ExErrorKind, Result, WdiffError};
pub use render::{render_stream, write_stream, Markers};
pub use token::{tokenize, tokenize_file, Token, TokenSequence};
