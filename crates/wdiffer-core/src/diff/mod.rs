//! Word diff engine.
//!
//! Compares two token sequences and produces an ordered edit transcript of
//! `Keep` / `Delete` / `Insert` operations whose `Keep` tokens form a longest
//! common subsequence of both inputs.
//!
//! ## Entry point
//!
//! ```
//! use wdiffer_core::diff::{compute_edits, Edit};
//! use wdiffer_core::token::tokenize;
//!
//! let edits = compute_edits(&tokenize("red car"), &tokenize("red fast car"));
//! assert_eq!(edits[1], Edit::Insert("fast".into()));
//! ```
//!
//! ## Stages
//!
//! 1. [`trim`] strips the common prefix and suffix.
//! 2. [`matrix`] builds the LCS length table over the remaining region.
//! 3. [`backtrace`] walks the table from its last cell to the origin.
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical transcripts.
//! - **Fixed tie-break**: at equal cost an insertion is emitted before a
//!   deletion is considered (see [`backtrace::prefers_insert`]).
//! - **Totality**: every pair of finite sequences yields a result; empty and
//!   identical inputs are ordinary cases.

pub mod backtrace;
pub mod engine;
pub mod matrix;
pub mod model;
pub mod summary;
pub mod trim;

pub use engine::{compute_edits, compute_edits_with, diff, DiffOptions};
pub use matrix::{lcs_length, LcsMatrix};
pub use model::{DiffReport, DiffStats, Edit};
pub use summary::render_statistics;
pub use trim::{trim, Trimmed};
