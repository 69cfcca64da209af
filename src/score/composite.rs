use super::recency::recency_bucket;
use crate::aggregate::group_by_repository;
use crate::config::RecencyMode;
use crate::error::Result;
use crate::model::{Commit, Metric, Repository};
use crate::rank::sort_commits_decreasing;

/// Weighted metrics of the composite score, applied in this order.
pub const COMPOSITE_WEIGHTS: [(Metric, i64); 5] = [
    (Metric::Files, 10),
    (Metric::Additions, 1),
    (Metric::Deletions, 1),
    (Metric::Users, 5),
    (Metric::Commits, 2),
];

/// Recency term of a commit in the newest bucket.
pub const RECENCY_CEILING: i64 = 100;

/// Group and score all commits with the composite formula.
///
/// Commits are sorted newest first before grouping, so each repository's
/// commits run from its latest to its earliest.
pub fn composite_scores(
    commits: &[Commit],
    number_of_days: i64,
    mode: RecencyMode,
) -> Result<Vec<Repository>> {
    let mut sorted = commits.to_vec();
    sort_commits_decreasing(&mut sorted, Metric::Timestamp)?;

    let (last, first) = match (sorted.first(), sorted.last()) {
        (Some(newest), Some(oldest)) => (newest.timestamp, oldest.timestamp),
        _ => return Ok(Vec::new()),
    };

    let mut repos = group_by_repository(&sorted);
    for repo in repos.iter_mut() {
        log::debug!("scoring repository {}", repo.repository);
        repo.score = composite_score(repo, first, last, number_of_days, mode);
    }
    Ok(repos)
}

/// Recency base plus the weighted metrics; arithmetic wraps on overflow.
pub fn composite_score(
    repo: &Repository,
    first: i64,
    last: i64,
    number_of_days: i64,
    mode: RecencyMode,
) -> i64 {
    let terms: Vec<i64> = repo
        .commits
        .iter()
        .map(|c| RECENCY_CEILING - recency_bucket(c.timestamp, first, last, number_of_days))
        .collect();

    let base = match mode {
        RecencyMode::Last => terms.last().copied(),
        RecencyMode::Max => terms.iter().max().copied(),
        RecencyMode::Min => terms.iter().min().copied(),
        RecencyMode::Mean if terms.is_empty() => None,
        RecencyMode::Mean => {
            Some(terms.iter().fold(0i64, |acc, &t| acc.wrapping_add(t)) / terms.len() as i64)
        }
    }
    .unwrap_or(repo.score);

    COMPOSITE_WEIGHTS
        .iter()
        .fold(base, |score, &(metric, weight)| {
            log::debug!("applying {metric} x{weight} to {}", repo.repository);
            score.wrapping_add(repo.score_by(metric).wrapping_mul(weight))
        })
}
