use crate::error::{BlipperError, Result};
use crate::model::{Commit, Metric, Repository};

impl Commit {
    /// Value of a per-commit metric. `users` and `commits` only exist at
    /// the repository level and are rejected.
    pub fn field(&self, metric: Metric) -> Result<i64> {
        match metric {
            Metric::Timestamp => Ok(self.timestamp),
            Metric::Files => Ok(self.files),
            Metric::Additions => Ok(self.additions),
            Metric::Deletions => Ok(self.deletions),
            Metric::Users | Metric::Commits => {
                Err(BlipperError::UnsupportedMetric(metric.to_string()))
            }
        }
    }

    pub fn value(&self, name: &str) -> Result<i64> {
        self.field(name.parse()?)
    }
}

impl Repository {
    /// Sums wrap on overflow instead of panicking.
    pub fn score_by(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Timestamp => self.sum_by(|c| c.timestamp),
            Metric::Files => self.sum_by(|c| c.files),
            Metric::Additions => self.sum_by(|c| c.additions),
            Metric::Deletions => self.sum_by(|c| c.deletions),
            // counts commits, not distinct authors
            Metric::Users => self.commits.len() as i64,
            Metric::Commits => self.commits.len() as i64,
        }
    }

    pub fn score_by_filter(&self, name: &str) -> Result<i64> {
        Ok(self.score_by(name.parse()?))
    }

    fn sum_by(&self, f: impl Fn(&Commit) -> i64) -> i64 {
        self.commits.iter().map(f).fold(0, i64::wrapping_add)
    }
}

/// Score every repository by a single metric, overwriting the placeholder score.
pub fn score_by_filter(repos: &mut [Repository], metric: Metric) {
    for repo in repos.iter_mut() {
        log::debug!("scoring repository {} by {}", repo.repository, metric);
        repo.score = repo.score_by(metric);
    }
}
