use super::*;

fn invalid_field(result: Result<(), ConfigError>) -> String {
    match result {
        Err(ConfigError::Invalid { field, .. }) => field,
        other => panic!("expected ConfigError::Invalid, got: {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(ScoringConfig::default().validate().is_ok());
}

#[test]
fn default_weights_normalize_to_one() {
    let w = ScoringWeights::default().normalized();
    assert!((w.total() - 1.0).abs() < 1e-12);
}

#[test]
fn unnormalized_weights_are_rescaled() {
    let w = ScoringWeights {
        frequency: 2.0,
        sentiment: 2.0,
        recency: 0.0,
        brand_fit: 0.0,
    }
    .normalized();
    assert!((w.frequency - 0.5).abs() < 1e-12);
    assert!((w.sentiment - 0.5).abs() < 1e-12);
    assert_eq!(w.recency, 0.0);
}

#[test]
fn negative_weight_is_rejected() {
    let mut cfg = ScoringConfig::default();
    cfg.weights.recency = -0.1;
    assert_eq!(invalid_field(cfg.validate()), "weights.recency");
}

#[test]
fn nan_weight_is_rejected() {
    let mut cfg = ScoringConfig::default();
    cfg.weights.sentiment = f64::NAN;
    assert_eq!(invalid_field(cfg.validate()), "weights.sentiment");
}

#[test]
fn all_zero_weights_are_rejected() {
    let mut cfg = ScoringConfig::default();
    cfg.weights = ScoringWeights {
        frequency: 0.0,
        sentiment: 0.0,
        recency: 0.0,
        brand_fit: 0.0,
    };
    assert_eq!(invalid_field(cfg.validate()), "weights");
}

#[test]
fn zero_top_n_is_rejected() {
    let cfg = ScoringConfig {
        top_n: 0,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "top_n");
}

#[test]
fn rejected_threshold_at_golden_is_rejected() {
    let cfg = ScoringConfig {
        golden_threshold: 0.5,
        rejected_threshold: 0.5,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "rejected_threshold");
}

#[test]
fn threshold_outside_unit_interval_is_rejected() {
    let cfg = ScoringConfig {
        golden_threshold: 1.5,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "golden_threshold");
}

#[test]
fn zero_recency_window_is_rejected() {
    let cfg = ScoringConfig {
        recency_window_days: 0,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "recency_window_days");
}

#[test]
fn oversized_recency_window_is_rejected() {
    let cfg = ScoringConfig {
        recency_window_days: 100_000_000,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "recency_window_days");

    let at_limit = ScoringConfig {
        recency_window_days: MAX_RECENCY_WINDOW_DAYS,
        ..ScoringConfig::default()
    };
    assert!(at_limit.validate().is_ok());
}

#[test]
fn overflowing_weight_total_is_rejected() {
    let mut cfg = ScoringConfig::default();
    cfg.weights = ScoringWeights {
        frequency: 1e308,
        sentiment: 1e308,
        recency: 0.0,
        brand_fit: 0.0,
    };
    assert_eq!(invalid_field(cfg.validate()), "weights");
}

#[test]
fn zero_min_mentions_is_rejected() {
    let cfg = ScoringConfig {
        min_mentions: 0,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "min_mentions");
}

#[test]
fn adjacent_weight_above_direct_is_rejected() {
    let cfg = ScoringConfig {
        direct_brand_weight: 0.4,
        adjacent_brand_weight: 0.6,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "adjacent_brand_weight");
}

#[test]
fn full_neutral_band_is_rejected() {
    let cfg = ScoringConfig {
        sentiment_neutral_band: 1.0,
        ..ScoringConfig::default()
    };
    assert_eq!(invalid_field(cfg.validate()), "sentiment_neutral_band");
}

#[test]
fn error_message_names_field() {
    let cfg = ScoringConfig {
        top_n: 0,
        ..ScoringConfig::default()
    };
    let msg = cfg.validate().unwrap_err().to_string();
    assert!(msg.contains("top_n"), "message was: {msg}");
}

#[test]
fn partial_yaml_fills_defaults() {
    let yaml = "golden_threshold: 0.75\nweights:\n  frequency: 1.0\n";
    let cfg: ScoringConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.golden_threshold, 0.75);
    assert_eq!(cfg.weights.frequency, 1.0);
    assert_eq!(cfg.weights.sentiment, ScoringWeights::default().sentiment);
    assert_eq!(cfg.top_n, 5);
    assert_eq!(cfg.brands, BrandCatalog::default());
}

#[test]
fn unknown_yaml_field_fails_to_parse() {
    let yaml = "golden_treshold: 0.75\n";
    assert!(serde_yaml::from_str::<ScoringConfig>(yaml).is_err());
}
