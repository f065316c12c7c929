//! Edit transcript reconstruction from an LCS table.

use crate::diff::matrix::LcsMatrix;
use crate::diff::model::Edit;
use crate::token::Token;

/// Tie-break between the insert path and the delete path.
///
/// `left` is `M[i][j-1]` (cost after inserting `b[j]`), `up` is `M[i-1][j]`
/// (cost after deleting `a[i]`). Insertion wins at equal cost. Changing this
/// changes the order of deletions and insertions in ambiguous regions.
pub const fn prefers_insert(left: usize, up: usize) -> bool {
    left >= up
}

/// Walk `matrix` from `(|a|, |b|)` back to `(0, 0)` and return the edits in
/// reading order.
///
/// At each cell, in priority order: keep on a token match, insert when the
/// insert path is at least as long as the delete path, delete otherwise.
/// Every changed token is its own operation; runs are not grouped.
///
/// `matrix` must have been built from `a` and `b`.
pub fn backtrace(matrix: &LcsMatrix, a: &[Token], b: &[Token]) -> Vec<Edit> {
    debug_assert_eq!((matrix.rows(), matrix.cols()), (a.len() + 1, b.len() + 1));

    let (mut i, mut j) = (a.len(), b.len());
    let mut edits = Vec::with_capacity(a.len() + b.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            edits.push(Edit::Keep(a[i - 1].clone()));
            i -= 1;
            j -= 1;
        } else if j > 0
            && (i == 0 || prefers_insert(matrix.get(i, j - 1), matrix.get(i - 1, j)))
        {
            edits.push(Edit::Insert(b[j - 1].clone()));
            j -= 1;
        } else {
            edits.push(Edit::Delete(a[i - 1].clone()));
            i -= 1;
        }
    }

    // Collected end-to-start.
    edits.reverse();
    edits
}
