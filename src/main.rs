use anyhow::Result;
use blipper::cli::Cli;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("STARTING");
    cli.execute()
}
