//! End-to-end scoring runs over hand-built mention sets.

use chrono::{DateTime, Duration, TimeZone, Utc};
use flavorscout_core::{BrandCatalog, BrandConfig, Mention, ScoringConfig, SentimentLabel};
use flavorscout_scoring::scorer::NEUTRAL_RECENCY;
use flavorscout_scoring::{
    score_mentions, score_mentions_checked, RecencyTrend, ScoringError, Tier,
};

fn t(day: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap() + Duration::days(day)
}

fn brand_a_config() -> ScoringConfig {
    ScoringConfig {
        brands: BrandCatalog {
            brands: vec![BrandConfig::new("brandA", &[], "test brand")],
            adjacent_tags: vec![],
        },
        ..ScoringConfig::default()
    }
}

fn mention(flavor: &str, id: &str, sentiment: SentimentLabel, brand: &str, at: i64) -> Mention {
    Mention::new(flavor, id)
        .with_sentiment(sentiment)
        .with_brand_fit(brand)
        .with_timestamp(t(at))
}

#[test]
fn mango_outranks_kiwi_and_is_golden() {
    let mentions = vec![
        mention("mango", "c1", SentimentLabel::Positive, "brandA", 0),
        mention("mango", "c2", SentimentLabel::Positive, "brandA", 1),
        mention("kiwi", "c3", SentimentLabel::Negative, "none", 0),
    ];
    let result = score_mentions(&mentions, &brand_a_config());

    assert_eq!(result.candidates[0].flavor, "mango");
    assert_eq!(result.candidates[1].flavor, "kiwi");
    let golden = result.golden().expect("mango should clear the golden threshold");
    assert_eq!(golden.flavor, "mango");
    assert_eq!(golden.rank, 1);
    assert_eq!(golden.recommended_brand.as_deref(), Some("brandA"));
    assert!((golden.composite_score - 0.9).abs() < 1e-9);
    assert_eq!(result.candidate("kiwi").unwrap().tier, Tier::Rejected);
}

#[test]
fn empty_input_gives_empty_result() {
    let result = score_mentions(&[], &ScoringConfig::default());
    assert!(result.is_empty());
    assert!(result.golden().is_none());
    assert_eq!(result.counts.total, 0);
    assert_eq!(result.counts.skipped, 0);
    assert_eq!(result.counts.degraded, 0);
}

#[test]
fn unusable_flavor_names_are_skipped_and_counted() {
    let mentions = vec![
        mention("", "c1", SentimentLabel::Positive, "none", 0),
        mention("   ", "c2", SentimentLabel::Positive, "none", 0),
        mention("Mango", "c3", SentimentLabel::Positive, "none", 0),
    ];
    let result = score_mentions(&mentions, &ScoringConfig::default());
    assert_eq!(result.counts.total, 3);
    assert_eq!(result.counts.skipped, 2);
    assert_eq!(result.counts.scored, 1);
    assert_eq!(result.candidates.len(), 1);
    assert_eq!(result.candidates[0].flavor, "mango");
}

#[test]
fn degraded_mentions_are_counted_and_explained() {
    let mentions = vec![
        Mention::new("chocolate", "c1"),
        mention("chocolate", "c2", SentimentLabel::Positive, "MuscleBlaze", 0),
    ];
    let result = score_mentions(&mentions, &ScoringConfig::default());
    let chocolate = result.candidate("chocolate").unwrap();
    assert_eq!(result.counts.degraded, 1);
    assert_eq!(chocolate.degraded_mentions, 1);
    assert_eq!(chocolate.sentiment.neutral, 1);
    assert!(
        chocolate
            .explanation
            .contains("1 of 2 mentions had defaulted fields"),
        "got: {}",
        chocolate.explanation
    );
}

#[test]
fn identical_groups_order_alphabetically() {
    let mentions = vec![
        mention("vanilla", "c1", SentimentLabel::Positive, "none", 0),
        mention("banana", "c2", SentimentLabel::Positive, "none", 0),
        mention("coffee", "c3", SentimentLabel::Positive, "none", 0),
    ];
    let result = score_mentions(&mentions, &ScoringConfig::default());
    let order: Vec<&str> = result.candidates.iter().map(|c| c.flavor.as_str()).collect();
    assert_eq!(order, vec!["banana", "coffee", "vanilla"]);
}

#[test]
fn new_flavor_gets_neutral_recency() {
    let mut mentions: Vec<Mention> = (0..3)
        .map(|i| mention("chocolate", &format!("old{i}"), SentimentLabel::Positive, "none", i * 20))
        .collect();
    // A burst of brand-new mentions within the last few days.
    mentions.extend(
        (0..4).map(|i| mention("paan", &format!("new{i}"), SentimentLabel::Positive, "none", 80 + i)),
    );

    let result = score_mentions(&mentions, &ScoringConfig::default());
    let paan = result.candidate("paan").unwrap();
    assert_eq!(paan.sub_scores.recency, NEUTRAL_RECENCY);
    assert_eq!(paan.recency.trend, RecencyTrend::Insufficient);
    assert_eq!(paan.recency.recent_mentions, 4);
}

#[test]
fn trending_flavor_beats_fading_flavor_on_recency() {
    // anchor = day 60; windows (0, 30] and (30, 60]
    let mut mentions = vec![
        mention("kesar", "k1", SentimentLabel::Neutral, "none", 5),
        mention("kesar", "k2", SentimentLabel::Neutral, "none", 40),
        mention("kesar", "k3", SentimentLabel::Neutral, "none", 50),
        mention("kesar", "k4", SentimentLabel::Neutral, "none", 60),
    ];
    mentions.extend([
        mention("lemon", "l1", SentimentLabel::Neutral, "none", 2),
        mention("lemon", "l2", SentimentLabel::Neutral, "none", 10),
        mention("lemon", "l3", SentimentLabel::Neutral, "none", 20),
        mention("lemon", "l4", SentimentLabel::Neutral, "none", 45),
    ]);

    let result = score_mentions(&mentions, &ScoringConfig::default());
    let kesar = result.candidate("kesar").unwrap();
    let lemon = result.candidate("lemon").unwrap();
    assert_eq!(kesar.recency.trend, RecencyTrend::Rising);
    assert_eq!(lemon.recency.trend, RecencyTrend::Falling);
    assert!(kesar.sub_scores.recency > lemon.sub_scores.recency);
    assert!(kesar.rank < lemon.rank);
}

#[test]
fn adjacent_tags_earn_partial_brand_fit() {
    let mentions = vec![
        mention("mocha", "c1", SentimentLabel::Positive, "HealthKart", 0),
        mention("mocha", "c2", SentimentLabel::Positive, "HealthKart", 1),
        mention("mint", "c3", SentimentLabel::Positive, "TrueBasics", 0),
        mention("mint", "c4", SentimentLabel::Positive, "True Basics", 1),
    ];
    let result = score_mentions(&mentions, &ScoringConfig::default());
    let mocha = result.candidate("mocha").unwrap();
    let mint = result.candidate("mint").unwrap();
    assert!((mocha.sub_scores.brand_fit - 0.5).abs() < 1e-12);
    assert!((mint.sub_scores.brand_fit - 1.0).abs() < 1e-12);
    assert!(mocha.recommended_brand.is_none());
    assert_eq!(mint.recommended_brand.as_deref(), Some("TrueBasics"));
    assert_eq!(mint.brand_breakdown.get("TrueBasics"), Some(&2));
}

#[test]
fn sentiment_distribution_is_reported() {
    let mentions = vec![
        mention("oreo", "c1", SentimentLabel::Positive, "none", 0),
        mention("oreo", "c2", SentimentLabel::Positive, "none", 1),
        mention("oreo", "c3", SentimentLabel::Negative, "none", 2),
        mention("oreo", "c4", SentimentLabel::Neutral, "none", 3),
    ];
    let result = score_mentions(&mentions, &ScoringConfig::default());
    let oreo = result.candidate("oreo").unwrap();
    assert_eq!(oreo.sentiment.positive, 2);
    assert_eq!(oreo.sentiment.negative, 1);
    assert_eq!(oreo.sentiment.neutral, 1);
    assert!((oreo.sub_scores.sentiment - 0.625).abs() < 1e-12);
}

#[test]
fn checked_scoring_rejects_bad_config_up_front() {
    let config = ScoringConfig {
        top_n: 0,
        ..ScoringConfig::default()
    };
    let mentions = vec![mention("mango", "c1", SentimentLabel::Positive, "none", 0)];
    let err = score_mentions_checked(&mentions, &config).unwrap_err();
    assert!(matches!(err, ScoringError::Config(_)));
    assert!(err.to_string().contains("top_n"));
}

#[test]
fn result_round_trips_through_json() {
    let mentions = vec![
        mention("mango", "c1", SentimentLabel::Positive, "MuscleBlaze", 0),
        mention("kiwi", "c2", SentimentLabel::Negative, "none", 3),
    ];
    let result = score_mentions(&mentions, &ScoringConfig::default());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"tier\":\"golden\""));
    let back: flavorscout_scoring::RankedResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.counts, result.counts);
    assert_eq!(back.golden().map(|c| c.flavor.as_str()), Some("mango"));
    assert_eq!(back.candidates.len(), result.candidates.len());
}

#[test]
fn earliest_representable_timestamp_scores_without_panicking() {
    let mentions = vec![Mention::new("mango", "c1")
        .with_sentiment(SentimentLabel::Positive)
        .with_brand_fit("brandA")
        .with_timestamp(DateTime::<Utc>::MIN_UTC)];
    let result = score_mentions_checked(&mentions, &brand_a_config()).unwrap();
    let mango = result.candidate("mango").unwrap();
    assert_eq!(mango.sub_scores.recency, NEUTRAL_RECENCY);
    assert_eq!(mango.recency.trend, RecencyTrend::Insufficient);
}

#[test]
fn oversized_recency_window_is_rejected_before_scoring() {
    let config = ScoringConfig {
        recency_window_days: 100_000_000,
        ..brand_a_config()
    };
    let mentions = vec![mention("mango", "c1", SentimentLabel::Positive, "brandA", 0)];
    let err = score_mentions_checked(&mentions, &config).unwrap_err();
    assert!(err.to_string().contains("recency_window_days"), "got: {err}");
}

#[test]
fn huge_but_finite_weights_are_rejected_before_scoring() {
    let mut config = brand_a_config();
    config.weights.frequency = 1e308;
    config.weights.sentiment = 1e308;
    let mentions = vec![mention("mango", "c1", SentimentLabel::Positive, "brandA", 0)];
    assert!(matches!(
        score_mentions_checked(&mentions, &config),
        Err(ScoringError::Config(_))
    ));
}

#[test]
fn golden_holds_rank_one_when_a_higher_scorer_lacks_mentions() {
    let config = ScoringConfig {
        min_mentions: 2,
        ..brand_a_config()
    };
    let mentions = vec![
        mention("paan", "p1", SentimentLabel::Positive, "brandA", 0),
        mention("mango", "m1", SentimentLabel::Positive, "none", 0),
        mention("mango", "m2", SentimentLabel::Positive, "none", 1),
    ];
    let result = score_mentions_checked(&mentions, &config).unwrap();
    let paan = result.candidate("paan").unwrap();
    let mango = result.candidate("mango").unwrap();
    assert!(paan.composite_score > mango.composite_score);

    let golden = result.golden().expect("mango clears the golden threshold");
    assert_eq!(golden.flavor, "mango");
    assert_eq!(golden.rank, 1);
    assert_eq!(paan.tier, Tier::Rejected);
    assert_eq!(paan.rank, 2);
}
