use log::{debug, warn};

use crate::api::{Client, Result};
use crate::identifier::RepoId;
use crate::identity::{contributor_disclosure_level, DisclosureLevel};

pub const DEFAULT_TOP_CONTRIBUTORS: usize = 10;

/// Number of `Low` disclosure contributors among the first `top_x` of `repo`.
///
/// Best effort: any failure is logged and counted as `0`.
pub async fn low_disclosure_count<CLIENT: Client>(client: &CLIENT, repo: &RepoId, top_x: usize) -> u64 {
    count_low_disclosure(client, repo, top_x).await.unwrap_or_else(|err| {
        warn!("Failed to count low disclosure contributors of {}: {}", repo, err);
        0
    })
}

async fn count_low_disclosure<CLIENT: Client>(client: &CLIENT, repo: &RepoId, top_x: usize) -> Result<u64> {
    let contributors = client
        .top_contributors(repo, CLIENT::FIRST_PAGE_NUMBER, CLIENT::MAX_CONTRIBUTORS_PAGE)
        .await?;
    debug!("Found {} contributors of {}", contributors.len(), repo);
    let mut low = 0;
    for contributor in contributors.iter().take(top_x) {
        if contributor_disclosure_level(client, contributor).await? == DisclosureLevel::Low {
            low += 1;
        }
    }
    Ok(low)
}
