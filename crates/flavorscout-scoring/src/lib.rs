//! Flavor scoring engine.
//!
//! Groups annotated [`Mention`](flavorscout_core::Mention)s by normalized
//! flavor name, scores each group on frequency, sentiment, recency and brand
//! fit, and ranks the groups into a [`RankedResult`] with Golden, Top,
//! Rejected and Dropped tiers. Scoring is a pure function of its inputs.

pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod types;

mod aggregate;
mod explain;
mod rank;

pub use error::ScoringError;
pub use pipeline::{score_mentions, score_mentions_checked};
pub use types::{
    FlavorCandidate, MentionCounts, RankedResult, RecencySummary, RecencyTrend, SentimentCounts,
    SubScores, Tier,
};
