use futures::{stream, StreamExt};
use log::{info, warn};

use crate::aggregator::{RepoAggregator, RepositoryRecord};
use crate::api::{Client, Error, Result};
use crate::identifier::RepoId;

/// Destination of aggregated records, e.g. an append-only table.
pub trait RecordSink {
    fn append(&mut self, record: &RepositoryRecord) -> Result<()>;
}

impl RecordSink for Vec<RepositoryRecord> {
    fn append(&mut self, record: &RepositoryRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

#[derive(Debug)]
pub enum RepoOutcome {
    Collected(RepositoryRecord),
    Skipped { repo: RepoId, reason: Error },
}

impl RepoOutcome {
    pub fn is_collected(&self) -> bool {
        matches!(self, RepoOutcome::Collected(_))
    }
}

pub struct BatchRunner<CLIENT: Client> {
    aggregator: RepoAggregator<CLIENT>,
}

impl<CLIENT: Client> BatchRunner<CLIENT> {
    pub fn new(aggregator: RepoAggregator<CLIENT>) -> Self {
        BatchRunner { aggregator }
    }

    /// Aggregates `repos` one after another and appends every record to `sink`.
    /// A failing repository is skipped, its outcome keeps the reason.
    pub async fn run<SINK: RecordSink>(&self, repos: Vec<RepoId>, sink: &mut SINK) -> Vec<RepoOutcome> {
        let aggregator = &self.aggregator;
        stream::iter(repos)
            .then(move |repo| async move {
                let record = aggregator.aggregate(&repo).await;
                (repo, record)
            })
            .map(|(repo, record)| {
                match record.and_then(|record| sink.append(&record).map(|_| record)) {
                    Ok(record) => {
                        info!("Collected {}", repo);
                        RepoOutcome::Collected(record)
                    }
                    Err(reason) => {
                        warn!("Skipped {}: {}", repo, reason);
                        RepoOutcome::Skipped { repo, reason }
                    }
                }
            })
            .collect()
            .await
    }
}
