use crate::error::{BlipperError, Result};
use crate::model::{Commit, UNKNOWN_USER};
use crate::util::parse_int;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COLUMNS: [&str; 6] = ["timestamp", "user", "repository", "files", "additions", "deletions"];

/// Read every row of a commit export, header included.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    log::debug!("reading file: {}", path.display());
    let file = File::open(path)?;
    read_rows_from(file)
}

pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Turn raw rows into commits. The first row is the header and is skipped.
pub fn parse_commits(rows: &[Vec<String>]) -> Result<Vec<Commit>> {
    log::debug!("parsing commits");
    let mut commits = Vec::with_capacity(rows.len().saturating_sub(1));

    for (n, row) in rows.iter().enumerate().skip(1) {
        let line = n + 1;
        let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
        let number = |idx: usize| -> Result<i64> {
            let raw = field(idx);
            parse_int(raw).ok_or_else(|| BlipperError::InvalidNumericInput {
                field: format!("row {line}, column {}", COLUMNS[idx]),
                value: raw.to_string(),
            })
        };

        let user = match field(1) {
            "" => UNKNOWN_USER.to_string(),
            u => u.to_string(),
        };

        commits.push(Commit {
            timestamp: number(0)?,
            user,
            repository: field(2).to_string(),
            files: number(3)?,
            additions: number(4)?,
            deletions: number(5)?,
        });
    }

    Ok(commits)
}

pub fn load_commits<P: AsRef<Path>>(path: P) -> Result<Vec<Commit>> {
    let rows = read_rows(path)?;
    parse_commits(&rows)
}
