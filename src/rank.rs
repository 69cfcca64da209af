use crate::aggregate::group_by_repository;
use crate::config::Config;
use crate::error::{BlipperError, Result};
use crate::ingest::load_commits;
use crate::model::{Commit, Metric, Repository};
use crate::output::{output_json, output_ndjson, output_table};
use crate::score::{composite_scores, score_by_filter};
use anyhow::Context;

/// Stable sort by score, highest first. Ties keep their relative order.
pub fn sort_by_score(repos: &mut [Repository]) {
    log::debug!("sorting by score");
    repos.sort_by(|a, b| b.score.cmp(&a.score));
}

/// The leading `n` repositories, or all of them when there are fewer.
pub fn top_n(repos: &[Repository], n: usize) -> &[Repository] {
    &repos[..n.min(repos.len())]
}

/// Stable sort of commits by a per-commit metric, highest first.
pub fn sort_commits_decreasing(commits: &mut [Commit], metric: Metric) -> Result<()> {
    log::debug!("sorting commits decreasing by {metric}");
    let key: fn(&Commit) -> i64 = match metric {
        Metric::Timestamp => |c: &Commit| c.timestamp,
        Metric::Files => |c: &Commit| c.files,
        Metric::Additions => |c: &Commit| c.additions,
        Metric::Deletions => |c: &Commit| c.deletions,
        Metric::Users | Metric::Commits => {
            return Err(BlipperError::UnsupportedMetric(metric.to_string()))
        }
    };
    commits.sort_by_key(|c| std::cmp::Reverse(key(c)));
    Ok(())
}

/// Score a set of commits and return every repository ranked.
pub fn rank_commits(commits: &[Commit], config: &Config) -> Result<Vec<Repository>> {
    let mut repos = match config.target {
        Some(metric) => {
            log::debug!("scoring filter received {metric}");
            let mut repos = group_by_repository(commits);
            score_by_filter(&mut repos, metric);
            repos
        }
        None => {
            log::debug!("applying composite scoring");
            composite_scores(commits, config.number_of_days, config.recency)?
        }
    };

    if !config.debug {
        for repo in repos.iter_mut() {
            repo.commits = Vec::new();
        }
    }

    sort_by_score(&mut repos);
    Ok(repos)
}

/// Load the configured commit file and rank its repositories.
pub fn run(config: &Config) -> Result<Vec<Repository>> {
    config.validate()?;
    let commits = load_commits(&config.filepath)?;
    log::info!(
        "loaded {} commits from {}",
        commits.len(),
        config.filepath.display()
    );
    rank_commits(&commits, config)
}

pub fn exec(config: Config, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let ranked = run(&config).with_context(|| {
        format!("Failed to rank repositories from {}", config.filepath.display())
    })?;
    let top = top_n(&ranked, config.top);

    if json {
        output_json(top, ranked.len(), &config)?;
    } else if ndjson {
        output_ndjson(top)?;
    } else {
        output_table(top, ranked.len(), &config)?;
    }

    Ok(())
}
