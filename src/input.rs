use log::warn;
use repo_metrics::api::Result;
use repo_metrics::identifier::{extract_owner_and_repo, RepoId};
use std::fs;
use std::path::Path;

/// Reads one repository reference per line. Blank lines are ignored, unusable references
/// are logged and left out.
pub fn read_repo_list(path: impl AsRef<Path>) -> Result<Vec<RepoId>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| anyhow::anyhow!("Failed to read {}: {}", path.display(), err))?;
    Ok(parse_repo_list(&content))
}

fn parse_repo_list(content: &str) -> Vec<RepoId> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match extract_owner_and_repo(line).and_then(|id| parse_id(&id)) {
            Ok(repo) => repo,
            Err(err) => {
                warn!("Ignoring line {}: {}", index + 1, err);
                None
            }
        })
        .collect()
}

fn parse_id(id: &str) -> Result<Option<RepoId>> {
    if id.is_empty() {
        return Ok(None);
    }
    id.parse().map(Some)
}
