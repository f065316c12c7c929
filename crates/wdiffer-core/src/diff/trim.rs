//! Common prefix/suffix trimming.
//!
//! Matching runs at the very start and end of both sequences are removed
//! before the matrix stage. They are reported back as `Keep` operations and
//! never enter the matrix or the backtrace.
//!
//! The split is exact: prefix `Keep`s + the backtrace of the middles +
//! suffix `Keep`s equals the backtrace of the full matrix. The suffix is
//! always exact because the backtrace starts from the end. The prefix is
//! shortened until its last token no longer occurs in either middle, since
//! otherwise the full matrix can match that token on the trimmed boundary.

use crate::token::Token;

/// The two sequences split into shared prefix, differing middles and shared suffix.
///
/// `prefix` and `suffix` borrow from the old sequence; the new sequence holds
/// identical tokens at the corresponding positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed<'a> {
    pub prefix: &'a [Token],
    pub a_mid: &'a [Token],
    pub b_mid: &'a [Token],
    pub suffix: &'a [Token],
}

impl Trimmed<'_> {
    /// True when nothing is left for the matrix stage
    pub fn is_fully_matched(&self) -> bool {
        self.a_mid.is_empty() && self.b_mid.is_empty()
    }
}

/// Split `a` and `b` into common prefix, middles and common suffix.
///
/// The suffix scan only uses the budget the prefix scan left over
/// (`min(|a|, |b|) - prefix_len`), so prefix and suffix never overlap.
/// The prefix then gives back tokens that reappear in a middle.
pub fn trim<'a>(a: &'a [Token], b: &'a [Token]) -> Trimmed<'a> {
    let mut prefix_len = a.iter().zip(b).take_while(|(x, y)| x == y).count();

    let budget = a.len().min(b.len()) - prefix_len;
    let suffix_len = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take(budget)
        .take_while(|(x, y)| x == y)
        .count();

    let (a_end, b_end) = (a.len() - suffix_len, b.len() - suffix_len);
    while prefix_len > 0 {
        let last = &a[prefix_len - 1];
        if !a[prefix_len..a_end].contains(last) && !b[prefix_len..b_end].contains(last) {
            break;
        }
        prefix_len -= 1;
    }

    Trimmed {
        prefix: &a[..prefix_len],
        a_mid: &a[prefix_len..a_end],
        b_mid: &b[prefix_len..b_end],
        suffix: &a[a_end..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn test_prefix_and_suffix_are_split_off() {
        let a = tokenize("the red car is fast");
        let b = tokenize("the blue car is fast");
        let t = trim(&a, &b);
        assert_eq!(t.prefix, &a[..1]);
        assert_eq!(t.a_mid, &a[1..2]);
        assert_eq!(t.b_mid, &b[1..2]);
        assert_eq!(t.suffix, &a[2..]);
    }

    #[test]
    fn test_identical_is_consumed_by_prefix() {
        let a = tokenize("one two\nthree");
        let t = trim(&a, &a);
        assert_eq!(t.prefix.len(), a.len());
        assert!(t.suffix.is_empty());
        assert!(t.is_fully_matched());
    }

    #[test]
    fn test_suffix_respects_remaining_budget() {
        // Without the budget the suffix scan would re-consume "x".
        let a: Vec<Token> = vec!["x".into(), "y".into()];
        let b: Vec<Token> = vec!["x".into(), "z".into(), "y".into()];
        let t = trim(&a, &b);
        assert_eq!(t.prefix.len(), 1);
        assert_eq!(t.suffix, &a[1..]);
        assert!(t.a_mid.is_empty());
        assert_eq!(t.b_mid, &b[1..2]);
    }

    #[test]
    fn test_prefix_gives_back_token_repeated_in_middle() {
        let a = tokenize("the cat");
        let b = tokenize("the the cat");
        let t = trim(&a, &b);
        // "the" reappears in the new middle once "cat" and the newline are trimmed.
        assert!(t.prefix.is_empty());
        assert_eq!(t.suffix, &a[1..]);
        assert_eq!(t.a_mid, &a[..1]);
        assert_eq!(t.b_mid, &b[..2]);
    }

    #[test]
    fn test_prefix_shrinks_past_repeated_runs() {
        let a: Vec<Token> = vec!["x".into(), "y".into(), "q".into()];
        let b: Vec<Token> = vec!["x".into(), "y".into(), "y".into(), "x".into()];
        let t = trim(&a, &b);
        // "y" reappears in b's middle, then "x" does too.
        assert!(t.prefix.is_empty());
        assert_eq!(t.a_mid, &a[..]);
        assert_eq!(t.b_mid, &b[..]);
    }

    #[test]
    fn test_prefix_kept_when_not_repeated() {
        let a = tokenize("one two three");
        let b = tokenize("one two four");
        let t = trim(&a, &b);
        assert_eq!(t.prefix, &a[..2]);
        assert_eq!(t.a_mid, &a[2..3]);
        assert_eq!(t.suffix, &a[3..]);
    }

    #[test]
    fn test_empty_side_trims_nothing() {
        let a: Vec<Token> = Vec::new();
        let b = tokenize("x y");
        let t = trim(&a, &b);
        assert!(t.prefix.is_empty());
        assert!(t.suffix.is_empty());
        assert_eq!(t.b_mid.len(), b.len());
    }

    #[test]
    fn test_no_common_ends() {
        let a: Vec<Token> = vec!["x".into(), "y".into()];
        let b: Vec<Token> = vec!["y".into(), "x".into()];
        let t = trim(&a, &b);
        assert!(t.prefix.is_empty());
        assert!(t.suffix.is_empty());
        assert_eq!(t.a_mid, &a[..]);
        assert_eq!(t.b_mid, &b[..]);
    }
}
