//! Label folding shared by flavor grouping and brand matching.

/// Fold a free-text label for comparison: trim, lowercase, and collapse runs
/// of whitespace to a single space.
///
/// Returns `None` when nothing alphanumeric is left, so `"  "`, `"--"` and
/// `"?!"` are all treated as unusable.
#[must_use]
pub fn fold_label(raw: &str) -> Option<String> {
    let folded = raw
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");

    if folded.chars().any(char::is_alphanumeric) {
        Some(folded)
    } else {
        None
    }
}
