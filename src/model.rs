use crate::config::RecencyMode;
use crate::error::BlipperError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SCHEMA_VERSION: u32 = 1;

/// Stand-in for commits recorded without an author.
pub const UNKNOWN_USER: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub timestamp: i64,
    pub user: String,
    pub repository: String,
    pub files: i64,
    pub additions: i64,
    pub deletions: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub repository: String,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commits: Vec<Commit>,
}

impl Repository {
    pub fn new(repository: String) -> Self {
        Self {
            repository,
            score: 1,
            commits: Vec::new(),
        }
    }

    pub fn with_commits(mut self, commits: Vec<Commit>) -> Self {
        self.commits = commits;
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }
}

/// The closed set of quantities a repository can be scored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Timestamp,
    Files,
    Additions,
    Deletions,
    Users,
    Commits,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Timestamp,
        Metric::Files,
        Metric::Additions,
        Metric::Deletions,
        Metric::Users,
        Metric::Commits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Timestamp => "timestamp",
            Metric::Files => "files",
            Metric::Additions => "additions",
            Metric::Deletions => "deletions",
            Metric::Users => "users",
            Metric::Commits => "commits",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = BlipperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| BlipperError::UnsupportedMetric(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source_path: String,
    pub number_of_days: i64,
    pub target: Option<Metric>,
    pub recency: RecencyMode,
    pub total_repositories: usize,
    pub repositories: Vec<Repository>,
}
