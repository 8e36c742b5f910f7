use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::text::fold_label;
use crate::ConfigError;

/// A target brand that flavor candidates are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    /// Alternate spellings an annotator may emit, e.g. `"Muscle Blaze"`.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Free-text positioning notes; not used in scoring.
    #[serde(default)]
    pub notes: Option<String>,
}

impl BrandConfig {
    #[must_use]
    pub fn new(name: &str, aliases: &[&str], notes: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            notes: Some(notes.to_string()),
        }
    }
}

/// How a mention's brand tag relates to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandMatch {
    /// The tag names a catalog brand (or one of its aliases). Holds the
    /// brand's canonical name.
    Direct(String),
    /// The tag is a generic or parent label listed in `adjacent_tags`.
    Adjacent,
    /// `"none"`, an unknown brand, or nothing usable.
    Unmatched,
}

/// The set of brands a flavor can be recommended for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCatalog {
    pub brands: Vec<BrandConfig>,
    /// Tags that signal partial fit without naming a target brand, e.g. the
    /// parent company.
    #[serde(default)]
    pub adjacent_tags: Vec<String>,
}

impl Default for BrandCatalog {
    fn default() -> Self {
        Self {
            brands: vec![
                BrandConfig::new(
                    "MuscleBlaze",
                    &["Muscle Blaze"],
                    "performance: gym enthusiasts, athletes, bodybuilders",
                ),
                BrandConfig::new(
                    "HK Vitals",
                    &["HKVitals"],
                    "everyday wellness, broad value-conscious audience",
                ),
                BrandConfig::new(
                    "TrueBasics",
                    &["True Basics"],
                    "premium, natural and holistic ingredients",
                ),
            ],
            adjacent_tags: vec!["HealthKart".to_string(), "HK".to_string()],
        }
    }
}

impl BrandCatalog {
    /// Resolve an annotator's brand tag against the catalog.
    #[must_use]
    pub fn resolve(&self, tag: &str) -> BrandMatch {
        let Some(folded) = fold_label(tag) else {
            return BrandMatch::Unmatched;
        };
        if folded == "none" {
            return BrandMatch::Unmatched;
        }

        for brand in &self.brands {
            let hit = std::iter::once(&brand.name)
                .chain(brand.aliases.iter())
                .any(|label| fold_label(label).as_deref() == Some(folded.as_str()));
            if hit {
                return BrandMatch::Direct(brand.name.clone());
            }
        }

        if self
            .adjacent_tags
            .iter()
            .any(|label| fold_label(label).as_deref() == Some(folded.as_str()))
        {
            return BrandMatch::Adjacent;
        }

        BrandMatch::Unmatched
    }

    /// Check that every brand has a name and that no folded label is claimed
    /// twice, so a tag can never resolve ambiguously.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brands.is_empty() {
            return Err(ConfigError::invalid(
                "brands",
                "at least one target brand is required",
            ));
        }

        let mut owners: HashMap<String, String> = HashMap::new();
        let mut claim = |label: &str, owner: &str| -> Result<(), ConfigError> {
            let Some(folded) = fold_label(label) else {
                return Err(ConfigError::invalid(
                    "brands",
                    format!("label '{label}' for '{owner}' must be non-empty"),
                ));
            };
            if folded == "none" {
                return Err(ConfigError::invalid(
                    "brands",
                    format!("'none' is reserved and cannot be used by '{owner}'"),
                ));
            }
            if let Some(previous) = owners.insert(folded, owner.to_string()) {
                return Err(ConfigError::invalid(
                    "brands",
                    format!("duplicate brand label '{label}' (used by '{previous}' and '{owner}')"),
                ));
            }
            Ok(())
        };

        for brand in &self.brands {
            if brand.name.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "brands",
                    "brand name must be non-empty",
                ));
            }
            claim(&brand.name, &brand.name)?;
            for alias in &brand.aliases {
                claim(alias, &brand.name)?;
            }
        }
        for tag in &self.adjacent_tags {
            claim(tag, "adjacent_tags")?;
        }

        Ok(())
    }
}
