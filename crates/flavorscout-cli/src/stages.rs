//! Handlers for the four pipeline commands.
//!
//! Each stage reads the previous stage's JSON file and writes its own, so a
//! run can be resumed or inspected at any step.

use std::path::Path;

use anyhow::Context;
use flavorscout_core::load_scoring_config;
use flavorscout_ingest::{
    annotate_in_batches, clean_records, records_to_mentions, summarize_flavors, AnalysisRecord,
    CleanedComment, LexiconAnnotator, RawComment,
};
use flavorscout_scoring::{score_mentions_checked, RankedResult};

use crate::io::{read_json, write_json};
use crate::report::{render_markdown, render_table};
use crate::ReportFormat;

/// How many keyword flavors the `clean` summary lists.
const SUMMARY_FLAVORS: usize = 10;

/// Clean raw comments and print the most frequent keyword flavors.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
pub(crate) fn run_clean(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raw: Vec<RawComment> = read_json(input)?;
    let cleaned = clean_records(&raw);
    write_json(output, &cleaned)?;

    tracing::info!(
        input = raw.len(),
        kept = cleaned.len(),
        path = %output.display(),
        "clean complete"
    );

    let mut summary: Vec<(String, usize)> = summarize_flavors(&cleaned).into_iter().collect();
    summary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!("kept {} of {} comments", cleaned.len(), raw.len());
    if summary.is_empty() {
        println!("no keyword flavors detected");
        return Ok(());
    }
    println!("{:<25}MENTIONS", "FLAVOR");
    for (flavor, count) in summary.iter().take(SUMMARY_FLAVORS) {
        println!("{flavor:<25}{count}");
    }

    Ok(())
}

/// Annotate cleaned comments with the offline lexicon annotator.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the batch size is zero, or
/// the output cannot be written. Failing batches are logged and skipped.
pub(crate) fn run_annotate(input: &Path, output: &Path, batch_size: usize) -> anyhow::Result<()> {
    let comments: Vec<CleanedComment> = read_json(input)?;
    let annotator = LexiconAnnotator::default();
    let outcome = annotate_in_batches(&annotator, &comments, batch_size)
        .context("annotation failed")?;
    write_json(output, &outcome.records)?;

    let relevant = outcome.records.iter().filter(|r| r.is_relevant).count();
    tracing::info!(
        comments = comments.len(),
        records = outcome.records.len(),
        relevant,
        failed_batches = outcome.failed_batches,
        path = %output.display(),
        "annotate complete"
    );

    println!(
        "annotated {} comments: {} relevant, {} failed batches",
        comments.len(),
        relevant,
        outcome.failed_batches
    );

    Ok(())
}

/// Score analysis records, write the ranked result and print it as a table.
///
/// # Errors
///
/// Returns an error if the scoring config is invalid, the input cannot be
/// read, or the output cannot be written.
pub(crate) fn run_score(
    input: &Path,
    output: &Path,
    scoring_config: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_scoring_config(scoring_config).context("failed to load scoring config")?;
    let records: Vec<AnalysisRecord> = read_json(input)?;
    let mentions = records_to_mentions(&records);
    let result = score_mentions_checked(&mentions, &config)?;
    write_json(output, &result)?;

    tracing::info!(
        mentions = result.counts.total,
        candidates = result.candidates.len(),
        golden = result.golden().map_or("none", |c| c.flavor.as_str()),
        path = %output.display(),
        "score complete"
    );

    println!("{}", render_table(&result));
    Ok(())
}

/// Print a previously written ranked result.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub(crate) fn run_report(input: &Path, format: ReportFormat) -> anyhow::Result<()> {
    let result: RankedResult = read_json(input)?;
    let rendered = match format {
        ReportFormat::Table => render_table(&result),
        ReportFormat::Markdown => render_markdown(&result, chrono::Utc::now()),
    };
    println!("{rendered}");
    Ok(())
}
