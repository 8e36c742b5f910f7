use serde::{Deserialize, Serialize};

/// A comment or review as persisted by a scraper.
///
/// Every field is optional because Reddit posts, Reddit comments and Amazon
/// reviews each fill a different subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Subreddit or product identifier the comment came from.
    #[serde(default)]
    pub subreddit: Option<String>,
    /// `"post"`, `"comment"` or `"review"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    /// Unix epoch seconds.
    #[serde(default)]
    pub created_utc: Option<f64>,
    /// RFC 3339 timestamp, used when `created_utc` is missing.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A deduplicated, non-spam comment with keyword-detected flavors attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedComment {
    pub id: String,
    pub body: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Lowercased flavor keywords found in the body, in order of appearance.
    #[serde(default)]
    pub flavors: Vec<String>,
}

/// Per-comment output of an annotator, merged with the comment's metadata.
///
/// Field names follow the JSON the annotation prompt asks the model for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(default)]
    pub comment_id: String,
    #[serde(default)]
    pub comment_text: String,
    #[serde(default)]
    pub flavors_mentioned: Vec<String>,
    #[serde(default)]
    pub is_relevant: bool,
    /// `"positive"`, `"negative"` or `"neutral"`; anything else is ignored.
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    /// Brand name, or `"none"`.
    #[serde(default)]
    pub brand_fit: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub subreddit: Option<String>,
}
