//! Plain-text and markdown rendering of a ranked result.

use chrono::{DateTime, Utc};
use flavorscout_scoring::{FlavorCandidate, RankedResult};

fn brand_label(candidate: &FlavorCandidate) -> &str {
    candidate.recommended_brand.as_deref().unwrap_or("-")
}

/// Fixed-width table of every candidate in rank order.
pub(crate) fn render_table(result: &RankedResult) -> String {
    if result.is_empty() {
        return format!(
            "no flavor candidates ({} mentions, {} skipped)",
            result.counts.total, result.counts.skipped
        );
    }

    let mut lines = vec![format!(
        "{:<6}{:<25}{:<10}{:<8}{:<10}{:<14}{:<10}BRAND",
        "RANK", "FLAVOR", "TIER", "SCORE", "MENTIONS", "SENTIMENT", "TREND"
    )];
    for c in &result.candidates {
        let sentiment = format!(
            "+{}/-{}/={}",
            c.sentiment.positive, c.sentiment.negative, c.sentiment.neutral
        );
        lines.push(format!(
            "{:<6}{:<25}{:<10}{:<8.4}{:<10}{:<14}{:<10}{}",
            c.rank,
            c.flavor,
            c.tier.to_string(),
            c.composite_score,
            c.mention_count,
            sentiment,
            c.recency.trend.to_string(),
            brand_label(c)
        ));
    }
    lines.push(String::new());
    lines.push(counts_line(result));
    lines.join("\n")
}

fn counts_line(result: &RankedResult) -> String {
    let counts = &result.counts;
    format!(
        "mentions: {} total, {} scored, {} skipped, {} degraded",
        counts.total, counts.scored, counts.skipped, counts.degraded
    )
}

fn candidate_rows(lines: &mut Vec<String>, candidates: &[&FlavorCandidate]) {
    lines.push("| Rank | Flavor | Score | Mentions | Brand | Why |".to_string());
    lines.push("|------|--------|-------|----------|-------|-----|".to_string());
    for c in candidates {
        lines.push(format!(
            "| {} | {} | {:.4} | {} | {} | {} |",
            c.rank,
            c.flavor,
            c.composite_score,
            c.mention_count,
            brand_label(c),
            c.explanation
        ));
    }
}

/// Markdown report: Golden Candidate, top list, rejected list and
/// data-completeness counts.
pub(crate) fn render_markdown(result: &RankedResult, generated: DateTime<Utc>) -> String {
    let mut lines = vec![
        "# Flavor Scout Report".to_string(),
        String::new(),
        format!("**Generated**: {}", generated.format("%Y-%m-%d %H:%M UTC")),
        format!("**Candidates**: {}", result.candidates.len()),
        String::new(),
        "---".to_string(),
        String::new(),
        "## Golden Candidate".to_string(),
        String::new(),
    ];

    match result.golden() {
        Some(golden) => {
            lines.push(format!(
                "**{}** ({:.4}), recommended for {}",
                golden.flavor,
                golden.composite_score,
                golden.recommended_brand.as_deref().unwrap_or("no specific brand")
            ));
            lines.push(String::new());
            lines.push(golden.explanation.clone());
            for snippet in &golden.sample_snippets {
                lines.push(format!("> {snippet}"));
            }
        }
        None => lines.push("No candidate cleared the golden threshold.".to_string()),
    }

    lines.push(String::new());
    lines.push("## Top Candidates".to_string());
    lines.push(String::new());
    let top = result.top();
    if top.is_empty() {
        lines.push("None.".to_string());
    } else {
        candidate_rows(&mut lines, &top);
    }

    lines.push(String::new());
    lines.push("## Rejected".to_string());
    lines.push(String::new());
    let rejected = result.rejected();
    if rejected.is_empty() {
        lines.push("None.".to_string());
    } else {
        candidate_rows(&mut lines, &rejected);
    }

    let dropped = result.dropped();
    if !dropped.is_empty() {
        lines.push(String::new());
        let names: Vec<&str> = dropped.iter().map(|c| c.flavor.as_str()).collect();
        lines.push(format!(
            "**Not shown** ({}): {}",
            dropped.len(),
            names.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push("## Data Completeness".to_string());
    lines.push(String::new());
    lines.push(format!("- Mentions received: {}", result.counts.total));
    lines.push(format!("- Mentions scored: {}", result.counts.scored));
    lines.push(format!(
        "- Skipped (no usable flavor name): {}",
        result.counts.skipped
    ));
    lines.push(format!(
        "- Degraded (defaulted fields): {}",
        result.counts.degraded
    ));

    lines.join("\n")
}
