//! Conversion from analysis records to scoring-engine mentions.

use chrono::{DateTime, NaiveDateTime, Utc};
use flavorscout_core::{Mention, SentimentLabel};

use crate::types::AnalysisRecord;

const SNIPPET_CHARS: usize = 200;

/// Resolve a record's timestamp: positive `created_utc` epoch seconds first,
/// then `created_at` as RFC 3339 (a trailing `Z` or an offset) or as a naive
/// `YYYY-MM-DDTHH:MM:SS` taken to be UTC.
///
/// Returns `None` when neither field yields a valid instant.
#[must_use]
pub fn parse_timestamp(created_utc: Option<f64>, created_at: Option<&str>) -> Option<DateTime<Utc>> {
    if let Some(epoch) = created_utc.filter(|e| e.is_finite() && *e > 0.0) {
        #[allow(clippy::cast_possible_truncation)]
        let secs = epoch.trunc() as i64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nanos = (epoch.fract() * 1e9) as u32;
        if let Some(ts) = DateTime::from_timestamp(secs, nanos) {
            return Some(ts);
        }
    }

    let raw = created_at.map(str::trim).filter(|s| !s.is_empty())?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Expand analysis records into one [`Mention`] per flavor.
///
/// Irrelevant records and records without flavors contribute nothing.
/// Sentiment strings outside positive/negative/neutral are dropped so the
/// scoring engine treats them as missing; the brand tag is passed through
/// untouched for the engine to resolve.
#[must_use]
pub fn records_to_mentions(records: &[AnalysisRecord]) -> Vec<Mention> {
    let mut mentions = Vec::new();
    let mut unparsed_timestamps = 0usize;

    for record in records.iter().filter(|r| r.is_relevant) {
        if record.flavors_mentioned.is_empty() {
            continue;
        }

        let sentiment = record.sentiment.as_deref().and_then(SentimentLabel::parse);
        let timestamp = parse_timestamp(record.created_utc, record.created_at.as_deref());
        if timestamp.is_none() {
            unparsed_timestamps += 1;
        }
        let snippet: String = record.comment_text.chars().take(SNIPPET_CHARS).collect();

        for flavor in &record.flavors_mentioned {
            mentions.push(Mention {
                flavor: flavor.clone(),
                comment_id: record.comment_id.clone(),
                sentiment,
                sentiment_score: record.sentiment_score,
                brand_fit: record.brand_fit.clone(),
                timestamp,
                snippet: snippet.clone(),
            });
        }
    }

    if unparsed_timestamps > 0 {
        tracing::debug!(
            records = unparsed_timestamps,
            "analysis records without a usable timestamp"
        );
    }

    mentions
}
