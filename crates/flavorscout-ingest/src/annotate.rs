//! Annotation of cleaned comments into [`AnalysisRecord`]s.
//!
//! The [`Annotator`] trait is the seam where a model-backed annotator plugs
//! in. [`LexiconAnnotator`] is the offline implementation: keyword flavors,
//! lexicon sentiment, and brand positioning keywords.

use std::collections::HashMap;

use flavorscout_core::{BrandCatalog, SentimentLabel};

use crate::error::IngestError;
use crate::lexicon::lexicon_score;
use crate::types::{AnalysisRecord, CleanedComment};

/// Lexicon scores within this distance of zero are labelled neutral.
const NEUTRAL_BAND: f64 = 0.1;

/// Positioning keywords per brand, matched as lowercase substrings.
const POSITIONING: &[(&str, &[&str])] = &[
    (
        "MuscleBlaze",
        &[
            "gym",
            "bodybuilding",
            "whey",
            "gainer",
            "pre-workout",
            "preworkout",
            "athlete",
            "bulk",
            "lifting",
        ],
    ),
    (
        "HK Vitals",
        &[
            "multivitamin",
            "daily",
            "wellness",
            "budget",
            "gummies",
            "affordable",
        ],
    ),
    (
        "TrueBasics",
        &["natural", "organic", "premium", "holistic", "clean label", "ayurvedic"],
    ),
];

/// Turns a batch of cleaned comments into analysis records.
pub trait Annotator {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Annotate one batch. Implementations return one record per comment
    /// they could interpret; comments they skip are simply absent.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Annotation`] when the whole batch failed.
    fn annotate(&self, batch: &[CleanedComment]) -> Result<Vec<AnalysisRecord>, IngestError>;
}

/// Offline annotator built on the keyword vocabulary and the lexicon.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnnotator {
    catalog: BrandCatalog,
}

impl LexiconAnnotator {
    #[must_use]
    pub fn new(catalog: BrandCatalog) -> Self {
        Self { catalog }
    }

    fn brand_for(&self, text: &str) -> String {
        let lower = text.to_lowercase();

        for brand in &self.catalog.brands {
            let named = std::iter::once(&brand.name)
                .chain(brand.aliases.iter())
                .any(|label| lower.contains(&label.to_lowercase()));
            if named {
                return brand.name.clone();
            }
        }

        for (brand, keywords) in POSITIONING {
            let in_catalog = self.catalog.brands.iter().any(|b| b.name == *brand);
            if in_catalog && keywords.iter().any(|k| lower.contains(k)) {
                return (*brand).to_string();
            }
        }

        "none".to_string()
    }
}

impl Annotator for LexiconAnnotator {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn annotate(&self, batch: &[CleanedComment]) -> Result<Vec<AnalysisRecord>, IngestError> {
        Ok(batch
            .iter()
            .map(|comment| {
                let text = match comment.title.as_deref() {
                    Some(title) if !title.trim().is_empty() => {
                        format!("{title} {}", comment.body)
                    }
                    _ => comment.body.clone(),
                };
                let score = f64::from(lexicon_score(&text));
                let label = SentimentLabel::from_score(score, NEUTRAL_BAND);
                let is_relevant = !comment.flavors.is_empty();

                AnalysisRecord {
                    comment_id: comment.id.clone(),
                    comment_text: comment.body.clone(),
                    flavors_mentioned: comment.flavors.clone(),
                    is_relevant,
                    sentiment: Some(label.to_string()),
                    sentiment_score: Some(score),
                    brand_fit: Some(self.brand_for(&text)),
                    reasoning: None,
                    ..AnalysisRecord::default()
                }
            })
            .collect())
    }
}

/// Records produced by [`annotate_in_batches`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationOutcome {
    pub records: Vec<AnalysisRecord>,
    /// Number of batches the annotator rejected. Their comments are absent
    /// from `records`.
    pub failed_batches: usize,
}

/// Run `annotator` over `comments` in chunks of `batch_size`.
///
/// A failing batch is logged and skipped; the run continues. Each returned
/// record gets `created_at`, `created_utc` and `subreddit` from the comment
/// with the same id when the annotator left them empty. Records whose id
/// matches no input comment are kept as-is.
///
/// # Errors
///
/// Returns [`IngestError::InvalidBatchSize`] when `batch_size` is zero.
pub fn annotate_in_batches<A: Annotator + ?Sized>(
    annotator: &A,
    comments: &[CleanedComment],
    batch_size: usize,
) -> Result<AnnotationOutcome, IngestError> {
    if batch_size == 0 {
        return Err(IngestError::InvalidBatchSize);
    }

    let by_id: HashMap<&str, &CleanedComment> =
        comments.iter().map(|c| (c.id.as_str(), c)).collect();
    let mut outcome = AnnotationOutcome::default();

    for (index, batch) in comments.chunks(batch_size).enumerate() {
        match annotator.annotate(batch) {
            Ok(records) => {
                tracing::debug!(
                    annotator = annotator.name(),
                    batch = index,
                    comments = batch.len(),
                    records = records.len(),
                    "annotated batch"
                );
                outcome
                    .records
                    .extend(records.into_iter().map(|r| merge_metadata(r, &by_id)));
            }
            Err(e) => {
                tracing::warn!(
                    annotator = annotator.name(),
                    batch = index,
                    comments = batch.len(),
                    error = %e,
                    "annotation batch failed; skipping"
                );
                outcome.failed_batches += 1;
            }
        }
    }

    Ok(outcome)
}

fn merge_metadata(
    mut record: AnalysisRecord,
    by_id: &HashMap<&str, &CleanedComment>,
) -> AnalysisRecord {
    let Some(comment) = by_id.get(record.comment_id.as_str()) else {
        return record;
    };
    if record.created_at.is_none() {
        record.created_at.clone_from(&comment.created_at);
    }
    if record.created_utc.is_none() {
        record.created_utc = comment.created_utc;
    }
    if record.subreddit.is_none() {
        record.subreddit.clone_from(&comment.subreddit);
    }
    if record.comment_text.is_empty() {
        record.comment_text.clone_from(&comment.body);
    }
    record
}

#[cfg(test)]
#[path = "annotate_test.rs"]
mod tests;
