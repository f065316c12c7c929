//! Diff computation engine.
//!
//! The core entry point is [`compute_edits`], which trims the common
//! prefix/suffix, builds the LCS table over what remains and reconstructs
//! the transcript. [`diff`] additionally applies the caller's markers.

use crate::diff::backtrace::backtrace;
use crate::diff::matrix::LcsMatrix;
use crate::diff::model::Edit;
use crate::diff::trim::trim;
use crate::render::Markers;
use crate::token::Token;

/// Engine switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Strip the common prefix/suffix before building the matrix
    pub trim: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self { trim: true }
    }
}

/// Compute the edit transcript from `a` (old) to `b` (new) with default options.
pub fn compute_edits(a: &[Token], b: &[Token]) -> Vec<Edit> {
    compute_edits_with(a, b, DiffOptions::default())
}

/// Compute the edit transcript from `a` (old) to `b` (new).
///
/// With trimming enabled the result is the common prefix as `Keep`s, the
/// reconstructed middle region, then the common suffix as `Keep`s. Identical
/// inputs short-circuit without building a matrix.
pub fn compute_edits_with(a: &[Token], b: &[Token], options: DiffOptions) -> Vec<Edit> {
    if !options.trim {
        return diff_region(a, b);
    }

    let trimmed = trim(a, b);
    tracing::debug!(
        prefix_len = trimmed.prefix.len(),
        suffix_len = trimmed.suffix.len(),
        old_mid = trimmed.a_mid.len(),
        new_mid = trimmed.b_mid.len(),
        "trimmed common prefix/suffix"
    );

    let mut edits = Vec::with_capacity(a.len() + b.len() - trimmed.prefix.len());
    edits.extend(trimmed.prefix.iter().cloned().map(Edit::Keep));
    if !trimmed.is_fully_matched() {
        edits.extend(diff_region(trimmed.a_mid, trimmed.b_mid));
    }
    edits.extend(trimmed.suffix.iter().cloned().map(Edit::Keep));
    edits
}

/// Matrix + backtrace over one region.
fn diff_region(a: &[Token], b: &[Token]) -> Vec<Edit> {
    let matrix = LcsMatrix::build(a, b);
    tracing::debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        lcs_len = matrix.lcs_len(),
        "built lcs matrix"
    );
    backtrace(&matrix, a, b)
}

/// Diff `a` against `b` and render each operation with `markers`.
///
/// Returns one string per operation, in reading order: kept tokens verbatim,
/// deleted and inserted tokens wrapped in their start/end markers.
pub fn diff(a: &[Token], b: &[Token], markers: &Markers) -> Vec<String> {
    compute_edits(a, b)
        .iter()
        .map(|edit| markers.render_edit(edit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn test_identical_inputs_are_all_keep() {
        let a = tokenize("one two\nthree\n");
        let edits = compute_edits(&a, &a);
        assert_eq!(edits, a.iter().cloned().map(Edit::Keep).collect::<Vec<_>>());
    }

    #[test]
    fn test_prefix_middle_suffix_are_concatenated() {
        let a = tokenize("the red car is fast");
        let b = tokenize("the blue car is fast");
        let edits = compute_edits(&a, &b);
        assert_eq!(edits[0], Edit::Keep("the".into()));
        assert_eq!(edits[1], Edit::Delete("red".into()));
        assert_eq!(edits[2], Edit::Insert("blue".into()));
        assert!(edits[3..].iter().all(Edit::is_keep));
        assert_eq!(edits.len(), 7);
    }

    #[test]
    fn test_untrimmed_path_on_simple_change() {
        let a = tokenize("red car");
        let b = tokenize("red fast car");
        let options = DiffOptions { trim: false };
        assert_eq!(compute_edits_with(&a, &b, options), compute_edits(&a, &b));
    }

    #[test]
    fn test_both_empty() {
        assert!(compute_edits(&[], &[]).is_empty());
        assert!(diff(&[], &[], &Markers::default()).is_empty());
    }

    #[test]
    fn test_diff_applies_markers() {
        let markers = Markers {
            insert_start: "[+".into(),
            insert_end: "+]".into(),
            ..Markers::default()
        };
        let rendered = diff(&tokenize("red car"), &tokenize("red fast car"), &markers);
        assert_eq!(rendered, vec!["red", "[+fast+]", "car", "\n"]);
    }
}
