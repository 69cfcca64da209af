use crate::model::{Commit, Repository};
use std::collections::HashMap;

/// Group commits by repository.
///
/// Repositories come back in the order their first commit appears, and each
/// keeps its commits in input order with the placeholder score of 1.
pub fn group_by_repository(commits: &[Commit]) -> Vec<Repository> {
    log::debug!("group commits by repository");
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut repos: Vec<Repository> = Vec::new();

    for commit in commits {
        let slot = *index.entry(commit.repository.as_str()).or_insert_with(|| {
            repos.push(Repository::new(commit.repository.clone()));
            repos.len() - 1
        });
        repos[slot].commits.push(commit.clone());
    }

    repos
}
