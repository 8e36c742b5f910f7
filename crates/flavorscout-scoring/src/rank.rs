//! Deterministic ordering and tier assignment.

use std::cmp::Ordering;

use flavorscout_core::ScoringConfig;

use crate::types::{FlavorCandidate, Tier};

/// Composite score descending, then mention count descending, then flavor
/// name ascending.
pub(crate) fn compare(a: &FlavorCandidate, b: &FlavorCandidate) -> Ordering {
    b.composite_score
        .total_cmp(&a.composite_score)
        .then_with(|| b.mention_count.cmp(&a.mention_count))
        .then_with(|| a.flavor.cmp(&b.flavor))
}

fn is_rejected(candidate: &FlavorCandidate, config: &ScoringConfig) -> bool {
    candidate.composite_score < config.rejected_threshold
        || candidate.mention_count < config.min_mentions
}

/// Sort candidates, number them from 1, and assign tiers.
///
/// Rejected candidates (below `rejected_threshold` or under `min_mentions`)
/// sort after every survivor, so a Golden Candidate always holds rank 1.
/// Both groups keep [`compare`] order. Among the survivors, the first
/// becomes Golden if it clears `golden_threshold`, the following ones fill
/// the remaining `top_n` display slots as Top, and the rest are Dropped.
pub(crate) fn rank_and_partition(candidates: &mut [FlavorCandidate], config: &ScoringConfig) {
    candidates.sort_by(|a, b| {
        is_rejected(a, config)
            .cmp(&is_rejected(b, config))
            .then_with(|| compare(a, b))
    });

    let mut slots_used = 0;
    let mut first_survivor_seen = false;

    for (idx, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = idx + 1;

        if is_rejected(candidate, config) {
            candidate.tier = Tier::Rejected;
            continue;
        }

        if !first_survivor_seen {
            first_survivor_seen = true;
            if candidate.composite_score >= config.golden_threshold {
                candidate.tier = Tier::Golden;
                slots_used += 1;
                continue;
            }
        }

        if slots_used < config.top_n {
            candidate.tier = Tier::Top;
            slots_used += 1;
        } else {
            candidate.tier = Tier::Dropped;
        }
    }
}
