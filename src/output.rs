use crate::config::Config;
use crate::model::{RankingOutput, Repository, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;

pub fn banner(config: &Config) -> String {
    let mut msg = format!(
        "You are requesting scoring for file: {} for {} days",
        config.filepath.display(),
        config.number_of_days
    );
    if let Some(target) = config.target {
        msg = format!("{msg} with filter: {target}");
    }
    msg
}

pub fn output_json(repos: &[Repository], total: usize, config: &Config) -> Result<()> {
    let output = RankingOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source_path: config.filepath.to_string_lossy().to_string(),
        number_of_days: config.number_of_days,
        target: config.target,
        recency: config.recency,
        total_repositories: total,
        repositories: repos.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(repos: &[Repository]) -> Result<()> {
    for repo in repos {
        println!("{}", serde_json::to_string(repo)?);
    }
    Ok(())
}

pub fn output_table(repos: &[Repository], total: usize, config: &Config) -> Result<()> {
    println!("{}", banner(config));
    println!();

    if repos.is_empty() {
        println!("No repositories to rank");
        return Ok(());
    }

    println!(
        "{:>4} {:<50} {:>12}",
        style("#").bold(),
        style("Repository").bold(),
        style("Score").bold()
    );
    println!("{}", "─".repeat(68));

    for (rank, repo) in repos.iter().enumerate() {
        println!(
            "{:>4} {:<50} {:>12}",
            style(rank + 1).dim(),
            repo.repository,
            style(repo.score).cyan()
        );
        if config.debug {
            for c in &repo.commits {
                println!(
                    "       {} {:<20} files: {:>4} +{:<6} -{:<6}",
                    style(c.timestamp).dim(),
                    c.user,
                    c.files,
                    style(c.additions).green(),
                    style(c.deletions).red()
                );
            }
        }
    }

    if total > repos.len() {
        println!("\n... and {} more repositories", total - repos.len());
    }
    Ok(())
}
