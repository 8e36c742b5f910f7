mod io;
mod report;
mod stages;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flavorscout")]
#[command(about = "Flavor Scout: rank candidate flavors from community comments")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Deduplicate raw comments, drop low-signal ones and tag keyword flavors
    Clean {
        /// Raw comments JSON (default: <data dir>/raw_comments.json)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Cleaned comments JSON (default: <data dir>/processed_data.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Annotate cleaned comments with flavors, sentiment and brand fit
    Annotate {
        #[arg(long)]
        input: Option<PathBuf>,

        /// Analysis records JSON (default: <data dir>/analysis_results.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Comments per annotation batch (default: FLAVORSCOUT_ANNOTATE_BATCH_SIZE)
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Score analysis records and write the ranked result
    Score {
        #[arg(long)]
        input: Option<PathBuf>,

        /// Ranked result JSON (default: <data dir>/scored_recommendations.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Scoring config YAML (default: FLAVORSCOUT_SCORING_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a report for a previously written ranked result
    Report {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Table,
    Markdown,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = flavorscout_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(env = %config.env, data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Some(Commands::Clean { input, output }) => stages::run_clean(
            &input.unwrap_or_else(|| config.raw_comments_path()),
            &output.unwrap_or_else(|| config.processed_path()),
        ),
        Some(Commands::Annotate {
            input,
            output,
            batch_size,
        }) => stages::run_annotate(
            &input.unwrap_or_else(|| config.processed_path()),
            &output.unwrap_or_else(|| config.analysis_path()),
            batch_size.unwrap_or(config.annotate_batch_size),
        ),
        Some(Commands::Score {
            input,
            output,
            config: scoring_path,
        }) => stages::run_score(
            &input.unwrap_or_else(|| config.analysis_path()),
            &output.unwrap_or_else(|| config.scored_path()),
            scoring_path.or_else(|| config.scoring_config_path.clone()).as_deref(),
        ),
        Some(Commands::Report { input, format }) => {
            stages::run_report(&input.unwrap_or_else(|| config.scored_path()), format)
        }
        None => {
            println!("flavorscout: no command given; run with --help for usage");
            Ok(())
        }
    }
}
