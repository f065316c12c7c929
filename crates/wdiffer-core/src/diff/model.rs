//! Diff output types.

use crate::token::Token;
use serde::{Deserialize, Serialize};

/// One step of the edit transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "token", rename_all = "snake_case")]
pub enum Edit {
    /// Token present in both inputs
    Keep(Token),
    /// Token present only in the old input
    Delete(Token),
    /// Token present only in the new input
    Insert(Token),
}

impl Edit {
    /// The token carried by this operation
    pub fn token(&self) -> &Token {
        match self {
            Edit::Keep(t) | Edit::Delete(t) | Edit::Insert(t) => t,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Edit::Keep(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Edit::Delete(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Edit::Insert(_))
    }
}

/// Counts derived from an edit transcript.
///
/// The `*_words` counters exclude newline tokens and are what the
/// statistics report prints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Tokens kept (LCS length)
    pub kept: usize,
    /// Tokens deleted from the old input
    pub deleted: usize,
    /// Tokens inserted from the new input
    pub inserted: usize,
    /// Kept tokens that are words
    pub kept_words: usize,
    /// Deleted tokens that are words
    pub deleted_words: usize,
    /// Inserted tokens that are words
    pub inserted_words: usize,
}

impl DiffStats {
    /// Tally an edit transcript
    pub fn from_edits(edits: &[Edit]) -> Self {
        let mut stats = Self::default();
        for edit in edits {
            let word = usize::from(!edit.token().is_newline());
            match edit {
                Edit::Keep(_) => {
                    stats.kept += 1;
                    stats.kept_words += word;
                }
                Edit::Delete(_) => {
                    stats.deleted += 1;
                    stats.deleted_words += word;
                }
                Edit::Insert(_) => {
                    stats.inserted += 1;
                    stats.inserted_words += word;
                }
            }
        }
        stats
    }

    /// Number of insert and delete operations
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted
    }

    /// True if both inputs had identical token sequences
    pub fn is_identical(&self) -> bool {
        self.edit_count() == 0
    }

    /// Words in the old input
    pub fn old_words(&self) -> usize {
        self.kept_words + self.deleted_words
    }

    /// Words in the new input
    pub fn new_words(&self) -> usize {
        self.kept_words + self.inserted_words
    }
}

/// Machine-readable diff output: statistics plus the full transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    pub stats: DiffStats,
    pub edits: Vec<Edit>,
}

impl DiffReport {
    pub fn new(edits: Vec<Edit>) -> Self {
        Self {
            stats: DiffStats::from_edits(&edits),
            edits,
        }
    }
}
