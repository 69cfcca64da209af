use crate::config::{Config, RecencyMode, DEFAULT_FILEPATH, DEFAULT_NUMBER_OF_DAYS, TOP_REPOSITORIES};
use crate::error::BlipperError;
use crate::model::Metric;
use crate::util::parse_int;
use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blipper")]
#[command(about = "Rank repositories by activity score from a CSV commit log")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version")]
    pub version: Option<bool>,

    #[arg(short, long, help = "CSV filename to read from", default_value = DEFAULT_FILEPATH)]
    pub filename: PathBuf,

    #[arg(
        short = 'n',
        long = "number-of-days",
        alias = "numberOfDays",
        help = "Number of days being analyzed (minimum 1)",
        default_value_t = DEFAULT_NUMBER_OF_DAYS,
        value_parser = parse_number_of_days,
        allow_negative_numbers = true
    )]
    pub number_of_days: i64,

    #[arg(
        short,
        long,
        help = "Score by a single metric (timestamp, files, additions, deletions, users, commits); composite score when omitted"
    )]
    pub target: Option<Metric>,

    #[arg(long, value_enum, help = "How commit recency combines into the composite score", default_value_t = RecencyMode::Last)]
    pub recency: RecencyMode,

    #[arg(long, help = "Number of repositories to report", default_value_t = TOP_REPOSITORIES)]
    pub top: usize,

    #[arg(short, long, help = "Keep commit detail and log debug output", default_value_t = false)]
    pub debug: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn config(&self) -> Config {
        let config = Config::new()
            .with_filepath(self.filename.clone())
            .with_number_of_days(self.number_of_days)
            .with_recency(self.recency)
            .with_top(self.top)
            .with_debug(self.debug);
        match self.target {
            Some(target) => config.with_target(target),
            None => config,
        }
    }

    pub fn execute(self) -> Result<()> {
        let config = self.config();
        crate::rank::exec(config, self.json, self.ndjson)
    }
}

/// Accepts the same integer literals as the commit file, e.g. `30` or `0x1e`.
pub fn parse_number_of_days(raw: &str) -> std::result::Result<i64, BlipperError> {
    parse_int(raw).ok_or_else(|| BlipperError::InvalidNumericInput {
        field: "number of days".to_string(),
        value: raw.to_string(),
    })
}
