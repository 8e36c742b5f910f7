use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-level settings for the command line tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding the raw, processed, analysis and scored JSON files.
    pub data_dir: PathBuf,
    /// Optional YAML file with scoring overrides.
    pub scoring_config_path: Option<PathBuf>,
    /// Comments per annotation batch.
    pub annotate_batch_size: usize,
}

impl AppConfig {
    #[must_use]
    pub fn raw_comments_path(&self) -> PathBuf {
        self.data_dir.join("raw_comments.json")
    }

    #[must_use]
    pub fn processed_path(&self) -> PathBuf {
        self.data_dir.join("processed_data.json")
    }

    #[must_use]
    pub fn analysis_path(&self) -> PathBuf {
        self.data_dir.join("analysis_results.json")
    }

    #[must_use]
    pub fn scored_path(&self) -> PathBuf {
        self.data_dir.join("scored_recommendations.json")
    }
}
