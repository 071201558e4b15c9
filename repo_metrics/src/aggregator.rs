use derive_more::Constructor;
use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::api::{Client, Collection, Result};
use crate::disclosure::low_disclosure_count;
use crate::identifier::RepoId;
use crate::recency;

/// Optional parts of a [`RepositoryRecord`]. Unselected metrics are never requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Metric {
    Topics,
    Commits,
    Contributors,
    LowDisclosure,
}

impl Metric {
    pub fn all() -> Vec<Metric> {
        Metric::iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct RepositoryRecord {
    pub repo: RepoId,
    pub forks: u64,
    pub stars: u64,
    pub topics: Option<Vec<String>>,
    pub commits: Option<u64>,
    pub contributors: Option<u64>,
    pub low_disclosure_contributors: Option<u64>,
    pub last_updated_days: u64,
}

pub struct RepoAggregator<CLIENT: Client> {
    client: CLIENT,
    top_contributors: usize,
    metrics: Vec<Metric>,
}

impl<CLIENT: Client> RepoAggregator<CLIENT> {
    pub fn new(client: CLIENT, top_contributors: usize, metrics: Vec<Metric>) -> Self {
        RepoAggregator {
            client,
            top_contributors,
            metrics,
        }
    }

    pub fn client(&self) -> &CLIENT {
        &self.client
    }

    /// Builds the record of `repo`. Failures of the essential requests propagate,
    /// the low disclosure count never fails.
    pub async fn aggregate(&self, repo: &RepoId) -> Result<RepositoryRecord> {
        debug!("Aggregating {}", repo);
        let summary = self.client.repository(repo).await?;
        let commits = self.count(repo, Metric::Commits, Collection::Commits).await?;
        let contributors = self.count(repo, Metric::Contributors, Collection::Contributors).await?;
        let low_disclosure_contributors = if self.selected(Metric::LowDisclosure) {
            Some(low_disclosure_count(&self.client, repo, self.top_contributors).await)
        } else {
            None
        };
        let last_updated_days = recency::days_since(&summary.updated_at)?;
        let topics = self.selected(Metric::Topics).then(|| summary.topics);

        Ok(RepositoryRecord::new(
            repo.clone(),
            summary.forks,
            summary.stars,
            topics,
            commits,
            contributors,
            low_disclosure_contributors,
            last_updated_days,
        ))
    }

    async fn count(&self, repo: &RepoId, metric: Metric, collection: Collection) -> Result<Option<u64>> {
        if !self.selected(metric) {
            return Ok(None);
        }
        self.client.count(repo, collection).await.map(Some)
    }

    fn selected(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }
}
