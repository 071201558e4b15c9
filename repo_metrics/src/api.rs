use async_trait::async_trait;
use derive_more::Constructor;
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::identifier::RepoId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid timestamp: {0}")]
    Format(String),
    #[error("Invalid repository reference: {0}")]
    Parse(String),
    #[error(
        "API request to {url} failed{}{}",
        .status.map(|s| format!(" with status {}", s)).unwrap_or_default(),
        .reason.as_ref().map(|r| format!(": {}", r)).unwrap_or_default()
    )]
    Api {
        url: String,
        status: Option<u16>,
        reason: Option<String>,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Core repository resource, `GET /repos/{owner}/{name}`.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct RepoSummary {
    pub forks: u64,
    pub stars: u64,
    pub topics: Vec<String>,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub updated_at: String,
}

/// Paginated collections whose size is derived from the `last` page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Commits,
    Contributors,
}

/// Entry of a contributors listing. Anonymous contributions carry no login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contributor {
    User(String),
    Anonymous,
}

/// Self-disclosed fields of a public user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub location: Option<String>,
    pub company: Option<String>,
    pub twitter_username: Option<String>,
    pub blog: Option<String>,
    pub email: Option<String>,
}

#[async_trait]
pub trait Client: Send + Sync {
    /// Largest page the contributors listing serves.
    const MAX_CONTRIBUTORS_PAGE: u32;
    const FIRST_PAGE_NUMBER: u32;

    async fn repository(&self, repo: &RepoId) -> Result<RepoSummary>;

    /// Total size of `collection`, read from pagination metadata.
    async fn count(&self, repo: &RepoId, collection: Collection) -> Result<u64>;

    /// Contributors in the platform's default ranking order, anonymous ones included.
    async fn top_contributors(&self, repo: &RepoId, page: u32, per_page: u32) -> Result<Vec<Contributor>>;

    async fn user(&self, login: &str) -> Result<UserProfile>;
}
