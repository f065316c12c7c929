//! LCS length table.
//!
//! `M[i][j]` is the length of the longest common subsequence of the first
//! `i` items of `a` and the first `j` items of `b`. Row and column 0 stand
//! for the empty prefix and are always 0; item `a[i - 1]` is matrix row `i`.

/// Full `(|a|+1) × (|b|+1)` LCS length table, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsMatrix {
    /// Build the table for `a` and `b`.
    ///
    /// `O(|a|·|b|)` time and space. This is the dominant cost of a diff.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[i * cols + (j - 1)].max(cells[(i - 1) * cols + j])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// `|a| + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `|b| + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `M[i][j]`
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    /// `M[|a|][|b|]`, the LCS length of the full inputs
    pub fn lcs_len(&self) -> usize {
        self.cells[self.rows * self.cols - 1]
    }
}

/// LCS length of `a` and `b` using two rolling rows.
///
/// Agrees with [`LcsMatrix::lcs_len`] but needs only `O(min(|a|, |b|))`
/// space, since no backtrace is possible from it.
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for x in long {
        for (j, y) in short.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_on_small_input() {
        let a = ["a", "b", "c", "b"];
        let b = ["b", "c", "b", "a"];
        let m = LcsMatrix::build(&a, &b);
        assert_eq!(m.rows(), 5);
        assert_eq!(m.cols(), 5);
        assert_eq!(m.lcs_len(), 3);
        for i in 0..m.rows() {
            assert_eq!(m.get(i, 0), 0);
        }
        for j in 0..m.cols() {
            assert_eq!(m.get(0, j), 0);
        }
        assert_eq!(m.get(2, 1), 1);
        assert_eq!(m.get(3, 2), 2);
    }

    #[test]
    fn test_degenerate_shapes() {
        let empty: [&str; 0] = [];
        let m = LcsMatrix::build(&empty, &empty);
        assert_eq!((m.rows(), m.cols()), (1, 1));
        assert_eq!(m.lcs_len(), 0);

        let m = LcsMatrix::build(&["x", "y"], &empty);
        assert_eq!((m.rows(), m.cols()), (3, 1));
        assert_eq!(m.lcs_len(), 0);
    }

    #[test]
    fn test_rolling_length_matches_full_table() {
        let a = ["the", "red", "car", "is", "red"];
        let b = ["a", "red", "bus", "is", "not", "red"];
        assert_eq!(lcs_length(&a, &b), LcsMatrix::build(&a, &b).lcs_len());
        assert_eq!(lcs_length(&b, &a), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        LcsMatrix::build(&["a"], &["a"]).get(2, 0);
    }
}
