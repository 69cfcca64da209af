use blipper::error::BlipperError;
use blipper::ingest::{load_commits, parse_commits, read_rows, read_rows_from};
use blipper::model::Commit;
use blipper::util::parse_int;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "timestamp,user,repository,files,additions,deletions
1678886400,user1,repo1,10,20,5
1678886401,user2,repo2,5,10,2
1678886402,user3,repo1,2,4,1
";

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|f| f.to_string()).collect())
        .collect()
}

#[test]
fn reads_rows_including_header() {
    let got = read_rows_from(SAMPLE.as_bytes()).unwrap();
    assert_eq!(
        got,
        rows(&[
            &["timestamp", "user", "repository", "files", "additions", "deletions"],
            &["1678886400", "user1", "repo1", "10", "20", "5"],
            &["1678886401", "user2", "repo2", "5", "10", "2"],
            &["1678886402", "user3", "repo1", "2", "4", "1"],
        ])
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = read_rows(dir.path().join("non_existent_file.csv")).unwrap_err();
    assert!(matches!(err, BlipperError::Io(_)), "got {err:?}");
}

#[test]
fn ragged_rows_are_rejected() {
    let data = "timestamp,user,repository,files,additions,deletions\n1,u,r,1\n";
    let err = read_rows_from(data.as_bytes()).unwrap_err();
    assert!(matches!(err, BlipperError::Csv(_)), "got {err:?}");
}

#[test]
fn parses_commits_and_skips_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commits.csv");
    fs::write(&path, SAMPLE).unwrap();

    let commits = load_commits(&path).unwrap();
    assert_eq!(commits.len(), 3);
    assert_eq!(
        commits[0],
        Commit {
            timestamp: 1678886400,
            user: "user1".into(),
            repository: "repo1".into(),
            files: 10,
            additions: 20,
            deletions: 5,
        }
    );
}

#[test]
fn empty_user_becomes_unknown() {
    let raw = rows(&[
        &["timestamp", "user", "repository", "files", "additions", "deletions"],
        &["1", "", "repo", "1", "2", "3"],
    ]);
    let commits = parse_commits(&raw).unwrap();
    assert_eq!(commits[0].user, "unknown");
}

#[test]
fn header_only_yields_no_commits() {
    let raw = rows(&[&["timestamp", "user", "repository", "files", "additions", "deletions"]]);
    assert!(parse_commits(&raw).unwrap().is_empty());
    assert!(parse_commits(&[]).unwrap().is_empty());
}

#[test]
fn non_numeric_field_names_row_and_column() {
    let raw = rows(&[
        &["timestamp", "user", "repository", "files", "additions", "deletions"],
        &["1", "u", "repo", "1", "2", "3"],
        &["2", "u", "repo", "many", "2", "3"],
    ]);
    match parse_commits(&raw) {
        Err(BlipperError::InvalidNumericInput { field, value }) => {
            assert_eq!(field, "row 3, column files");
            assert_eq!(value, "many");
        }
        other => panic!("expected InvalidNumericInput, got {other:?}"),
    }
}

#[test]
fn parse_int_accepts_literal_forms() {
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("-7"), Some(-7));
    assert_eq!(parse_int("+7"), Some(7));
    assert_eq!(parse_int("0"), Some(0));
    assert_eq!(parse_int("0x1F"), Some(31));
    assert_eq!(parse_int("0o17"), Some(15));
    assert_eq!(parse_int("017"), Some(15));
    assert_eq!(parse_int("0b101"), Some(5));
    assert_eq!(parse_int("1_000"), Some(1000));
    assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
}

#[test]
fn parse_int_rejects_garbage() {
    for raw in ["", "-", "abc", "12a", "0x", "1__0", "_1", "1_", "09", " 1", "9223372036854775808"] {
        assert_eq!(parse_int(raw), None, "input {raw:?}");
    }
}
