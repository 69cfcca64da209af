use crate::error::{BlipperError, Result};
use crate::model::Metric;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FILEPATH: &str = "../assets/commits.csv";
pub const DEFAULT_NUMBER_OF_DAYS: i64 = 100;
pub const TOP_REPOSITORIES: usize = 9;

/// How the per-commit recency terms of a repository collapse into its base score.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyMode {
    /// The last commit of the group decides the base score
    #[default]
    Last,
    /// Highest recency term across the group
    Max,
    /// Lowest recency term across the group
    Min,
    /// Truncated integer mean of the recency terms
    Mean,
}

/// Everything a ranking run needs, threaded explicitly from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub filepath: PathBuf,
    pub number_of_days: i64,
    pub target: Option<Metric>,
    pub recency: RecencyMode,
    pub top: usize,
    pub debug: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            filepath: PathBuf::from(DEFAULT_FILEPATH),
            number_of_days: DEFAULT_NUMBER_OF_DAYS,
            target: None,
            recency: RecencyMode::default(),
            top: TOP_REPOSITORIES,
            debug: false,
        }
    }

    pub fn with_filepath(mut self, filepath: impl Into<PathBuf>) -> Self {
        self.filepath = filepath.into();
        self
    }

    pub fn with_number_of_days(mut self, number_of_days: i64) -> Self {
        self.number_of_days = number_of_days;
        self
    }

    pub fn with_target(mut self, target: Metric) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_recency(mut self, recency: RecencyMode) -> Self {
        self.recency = recency;
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.number_of_days <= 0 {
            return Err(BlipperError::InvalidNumericInput {
                field: "number of days (must be bigger than 0)".to_string(),
                value: self.number_of_days.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
