use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment assigned to a mention by the annotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Parse an annotator label, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything other than `positive`, `negative` or
    /// `neutral`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Classify a numeric score in `[-1.0, 1.0]`.
    ///
    /// Scores within `neutral_band` of zero (inclusive) are neutral.
    #[must_use]
    pub fn from_score(score: f64, neutral_band: f64) -> Self {
        if score > neutral_band {
            Self::Positive
        } else if score < -neutral_band {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// One reference to a candidate flavor in a single comment.
///
/// Produced by the annotation step and never modified afterwards. Optional
/// fields are ones the annotator may fail to fill; the scoring engine
/// substitutes neutral defaults for them and reports the mention as degraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Flavor name as the annotator wrote it, e.g. `"Salted Caramel"`.
    pub flavor: String,
    /// ID of the comment the mention came from.
    #[serde(default)]
    pub comment_id: String,
    #[serde(default)]
    pub sentiment: Option<SentimentLabel>,
    /// Numeric sentiment in `[-1.0, 1.0]`. Only consulted when `sentiment`
    /// is absent.
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    /// Brand tag as returned by the annotator (`"MuscleBlaze"`, `"none"`, ...).
    #[serde(default)]
    pub brand_fit: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub snippet: String,
}

impl Mention {
    /// Convenience constructor for a mention with only a flavor name set.
    #[must_use]
    pub fn new(flavor: impl Into<String>, comment_id: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
            comment_id: comment_id.into(),
            sentiment: None,
            sentiment_score: None,
            brand_fit: None,
            timestamp: None,
            snippet: String::new(),
        }
    }

    #[must_use]
    pub fn with_sentiment(mut self, sentiment: SentimentLabel) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    #[must_use]
    pub fn with_sentiment_score(mut self, score: f64) -> Self {
        self.sentiment_score = Some(score);
        self
    }

    #[must_use]
    pub fn with_brand_fit(mut self, brand_fit: impl Into<String>) -> Self {
        self.brand_fit = Some(brand_fit.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }
}
