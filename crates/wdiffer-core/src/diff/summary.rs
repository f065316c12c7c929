//! Human-readable statistics report.

use crate::diff::model::DiffStats;

/// Integer percentage of `part` in `whole`, rounded half up; 0 for an empty whole.
fn percent(part: usize, whole: usize) -> usize {
    if whole == 0 {
        0
    } else {
        (part * 100 + whole / 2) / whole
    }
}

/// Render the two-line statistics report.
///
/// ```text
/// old.txt: 3 words  2 67% common  1 33% deleted
/// new.txt: 4 words  2 50% common  2 50% inserted
/// ```
///
/// Only words are counted; newline tokens are excluded.
pub fn render_statistics(stats: &DiffStats, old_label: &str, new_label: &str) -> String {
    let old_words = stats.old_words();
    let new_words = stats.new_words();
    let mut report = format!(
        "{}: {} words  {} {}% common  {} {}% deleted\n",
        old_label,
        old_words,
        stats.kept_words,
        percent(stats.kept_words, old_words),
        stats.deleted_words,
        percent(stats.deleted_words, old_words),
    );
    report.push_str(&format!(
        "{}: {} words  {} {}% common  {} {}% inserted\n",
        new_label,
        new_words,
        stats.kept_words,
        percent(stats.kept_words, new_words),
        stats.inserted_words,
        percent(stats.inserted_words, new_words),
    ));
    report
}
