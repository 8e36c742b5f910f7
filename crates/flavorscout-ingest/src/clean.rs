//! Deduplication, low-signal filtering and keyword flavor detection.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{CleanedComment, RawComment};

/// Bodies shorter than this (after trimming) carry too little signal to keep.
const MIN_BODY_CHARS: usize = 10;

static FLAVOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(chocolate|vanilla|strawberry|mango|banana|cookies and cream|cookies? n cream|coffee|mocha|kesar|paan|kulfi|rasmalai|butterscotch|blueberry|mint|peanut butter|salted caramel|caramel|oreo|biscuit|thandai|rose|lychee|orange|lemon|pineapple)\b",
    )
    .expect("valid regex")
});

/// Find known flavor keywords in `text`, lowercased, in order of appearance.
///
/// `"cookie n cream"` and `"cookies n cream"` are reported as
/// `"cookies and cream"`.
#[must_use]
pub fn extract_flavors(text: &str) -> Vec<String> {
    FLAVOR_PATTERN
        .find_iter(text)
        .map(|m| {
            let flavor = m.as_str().to_lowercase();
            if flavor.ends_with(" n cream") {
                "cookies and cream".to_string()
            } else {
                flavor
            }
        })
        .collect()
}

fn is_low_signal(body: &str) -> bool {
    let body = body.trim();
    body.chars().count() < MIN_BODY_CHARS
        || body.eq_ignore_ascii_case("[deleted]")
        || body.eq_ignore_ascii_case("[removed]")
}

/// Drop records without an id, repeated ids (first occurrence wins) and
/// low-signal bodies, then attach keyword flavors.
///
/// Comments with no keyword flavor are kept: an annotator may still find
/// flavors the vocabulary misses.
#[must_use]
pub fn clean_records(records: &[RawComment]) -> Vec<CleanedComment> {
    let mut seen_ids = HashSet::new();
    let mut cleaned = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let Some(id) = record.id.as_deref().filter(|id| !id.trim().is_empty()) else {
            dropped += 1;
            continue;
        };
        if !seen_ids.insert(id.to_string()) {
            dropped += 1;
            continue;
        }

        let body = record.body.as_deref().unwrap_or_default();
        if is_low_signal(body) {
            dropped += 1;
            continue;
        }

        cleaned.push(CleanedComment {
            id: id.to_string(),
            body: body.to_string(),
            title: record.title.clone(),
            subreddit: record.subreddit.clone(),
            kind: record.kind.clone(),
            score: record.score,
            created_utc: record.created_utc,
            created_at: record.created_at.clone(),
            flavors: extract_flavors(body),
        });
    }

    tracing::debug!(
        input = records.len(),
        kept = cleaned.len(),
        dropped,
        "cleaned raw comments"
    );

    cleaned
}

/// Count keyword flavors across cleaned comments.
#[must_use]
pub fn summarize_flavors(comments: &[CleanedComment]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for flavor in comments.iter().flat_map(|c| c.flavors.iter()) {
        *counts.entry(flavor.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
#[path = "clean_test.rs"]
mod tests;
