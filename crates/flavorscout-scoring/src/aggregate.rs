//! Grouping of mentions by normalized flavor name.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use flavorscout_core::{fold_label, BrandMatch, Mention, ScoringConfig, SentimentLabel};

use crate::types::SentimentCounts;

const MAX_SAMPLE_SNIPPETS: usize = 3;

/// Everything the scorer needs about one flavor group.
#[derive(Debug, Default)]
pub(crate) struct GroupStats {
    pub(crate) mention_count: usize,
    pub(crate) sentiment: SentimentCounts,
    pub(crate) brand_credit: f64,
    pub(crate) brand_breakdown: BTreeMap<String, usize>,
    pub(crate) timestamps: Vec<DateTime<Utc>>,
    pub(crate) degraded: usize,
    pub(crate) samples: Vec<String>,
}

impl GroupStats {
    fn absorb(&mut self, mention: &Mention, config: &ScoringConfig) {
        let mut degraded = false;

        let label = match (mention.sentiment, mention.sentiment_score) {
            (Some(label), _) => label,
            (None, Some(score)) if score.is_finite() => {
                SentimentLabel::from_score(score, config.sentiment_neutral_band)
            }
            _ => {
                degraded = true;
                SentimentLabel::Neutral
            }
        };
        match label {
            SentimentLabel::Positive => self.sentiment.positive += 1,
            SentimentLabel::Negative => self.sentiment.negative += 1,
            SentimentLabel::Neutral => self.sentiment.neutral += 1,
        }

        match mention.brand_fit.as_deref() {
            Some(tag) => match config.brands.resolve(tag) {
                BrandMatch::Direct(brand) => {
                    self.brand_credit += config.direct_brand_weight;
                    *self.brand_breakdown.entry(brand).or_insert(0) += 1;
                }
                BrandMatch::Adjacent => self.brand_credit += config.adjacent_brand_weight,
                BrandMatch::Unmatched => {}
            },
            None => degraded = true,
        }

        match mention.timestamp {
            Some(ts) => self.timestamps.push(ts),
            None => degraded = true,
        }

        if degraded {
            self.degraded += 1;
        }

        let snippet = mention.snippet.trim();
        if !snippet.is_empty() && self.samples.len() < MAX_SAMPLE_SNIPPETS {
            self.samples.push(snippet.to_string());
        }

        self.mention_count += 1;
    }

    /// Most frequently tagged direct brand; ties go to the name sorting first.
    pub(crate) fn recommended_brand(&self) -> Option<String> {
        let mut best: Option<(&String, usize)> = None;
        for (brand, &count) in &self.brand_breakdown {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((brand, count));
            }
        }
        best.map(|(brand, _)| brand.clone())
    }
}

/// Mentions grouped by normalized flavor name.
#[derive(Debug, Default)]
pub(crate) struct Grouped {
    pub(crate) groups: BTreeMap<String, GroupStats>,
    pub(crate) skipped: usize,
    /// Latest timestamp across every scored mention.
    pub(crate) anchor: Option<DateTime<Utc>>,
}

impl Grouped {
    pub(crate) fn max_count(&self) -> usize {
        self.groups
            .values()
            .map(|g| g.mention_count)
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn degraded(&self) -> usize {
        self.groups.values().map(|g| g.degraded).sum()
    }

    pub(crate) fn scored(&self) -> usize {
        self.groups.values().map(|g| g.mention_count).sum()
    }
}

/// Fold flavor names and accumulate per-group statistics.
///
/// Mentions whose flavor name has nothing alphanumeric in it are counted in
/// `skipped` and otherwise ignored.
pub(crate) fn group_mentions(mentions: &[Mention], config: &ScoringConfig) -> Grouped {
    let mut grouped = Grouped::default();

    for mention in mentions {
        let Some(name) = fold_label(&mention.flavor) else {
            tracing::debug!(
                comment_id = %mention.comment_id,
                raw_flavor = %mention.flavor,
                "skipping mention without a usable flavor name"
            );
            grouped.skipped += 1;
            continue;
        };

        if let Some(ts) = mention.timestamp {
            grouped.anchor = Some(grouped.anchor.map_or(ts, |a| a.max(ts)));
        }

        grouped
            .groups
            .entry(name)
            .or_default()
            .absorb(mention, config);
    }

    grouped
}
