use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where a candidate landed in the ranked result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Rank-1 candidate clearing the golden threshold.
    Golden,
    /// Displayed recommendation after the Golden Candidate.
    Top,
    /// Below the rejected threshold or the minimum mention count.
    Rejected,
    /// Passed the rejection cut but did not fit in the displayed slots.
    Dropped,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Golden => write!(f, "golden"),
            Tier::Top => write!(f, "top"),
            Tier::Rejected => write!(f, "rejected"),
            Tier::Dropped => write!(f, "dropped"),
        }
    }
}

/// Direction of mention density between the prior and the recent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyTrend {
    Rising,
    Steady,
    Falling,
    /// Too few dated mentions, or a history shorter than one window.
    Insufficient,
}

impl std::fmt::Display for RecencyTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecencyTrend::Rising => write!(f, "rising"),
            RecencyTrend::Steady => write!(f, "steady"),
            RecencyTrend::Falling => write!(f, "falling"),
            RecencyTrend::Insufficient => write!(f, "insufficient"),
        }
    }
}

/// The four sub-scores, each in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub frequency: f64,
    pub sentiment: f64,
    pub recency: f64,
    pub brand_fit: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencySummary {
    pub recent_mentions: usize,
    pub prior_mentions: usize,
    pub trend: RecencyTrend,
}

/// Scores and statistics for one normalized flavor name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorCandidate {
    /// Normalized flavor name (the grouping key).
    pub flavor: String,
    /// 1-based position in the full ranking.
    pub rank: usize,
    pub tier: Tier,
    /// Weighted sum of the sub-scores, rounded to four decimals.
    pub composite_score: f64,
    pub sub_scores: SubScores,
    pub mention_count: usize,
    pub sentiment: SentimentCounts,
    pub recency: RecencySummary,
    /// Target brand most often tagged directly. Ties go to the name that
    /// sorts first.
    pub recommended_brand: Option<String>,
    /// Direct brand tags by canonical brand name.
    pub brand_breakdown: BTreeMap<String, usize>,
    /// Mentions whose sentiment, brand fit or timestamp had to be defaulted.
    pub degraded_mentions: usize,
    /// Up to three snippets, in input order.
    pub sample_snippets: Vec<String>,
    pub explanation: String,
}

/// Input accounting for one scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCounts {
    /// Mentions handed to the engine.
    pub total: usize,
    /// Mentions that contributed to a candidate.
    pub scored: usize,
    /// Mentions excluded for lacking a usable flavor name.
    pub skipped: usize,
    /// Scored mentions with at least one defaulted field.
    pub degraded: usize,
}

/// Every candidate of a run in rank order, each tagged with its tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub candidates: Vec<FlavorCandidate>,
    pub counts: MentionCounts,
}

impl RankedResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The Golden Candidate, if one cleared the golden threshold.
    #[must_use]
    pub fn golden(&self) -> Option<&FlavorCandidate> {
        self.candidates.iter().find(|c| c.tier == Tier::Golden)
    }

    /// Displayed recommendations after the Golden Candidate, in rank order.
    #[must_use]
    pub fn top(&self) -> Vec<&FlavorCandidate> {
        self.in_tier(Tier::Top)
    }

    /// Rejected candidates, in rank order.
    #[must_use]
    pub fn rejected(&self) -> Vec<&FlavorCandidate> {
        self.in_tier(Tier::Rejected)
    }

    /// Candidates kept only for inspection, in rank order.
    #[must_use]
    pub fn dropped(&self) -> Vec<&FlavorCandidate> {
        self.in_tier(Tier::Dropped)
    }

    #[must_use]
    pub fn in_tier(&self, tier: Tier) -> Vec<&FlavorCandidate> {
        self.candidates.iter().filter(|c| c.tier == tier).collect()
    }

    /// Look up a candidate by normalized flavor name.
    #[must_use]
    pub fn candidate(&self, flavor: &str) -> Option<&FlavorCandidate> {
        self.candidates.iter().find(|c| c.flavor == flavor)
    }
}
