use repo_metrics::aggregator::RepositoryRecord;
use repo_metrics::api::Result;
use repo_metrics::batch::RecordSink;
use std::fs::{File, OpenOptions};
use std::path::Path;

pub const HEADER: [&str; 8] = [
    "repo_name",
    "forks",
    "stars",
    "contributors",
    "commits",
    "last_updated_days",
    "low_disclosure_contributors",
    "topics",
];

const TOPIC_SEPARATOR: &str = ";";

/// Appends records to a CSV file. The header is written only into a new or empty file.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    pub fn append_to(path: impl AsRef<Path>) -> Result<CsvSink> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| anyhow::anyhow!("Failed to open {}: {}", path.display(), err))?;
        let empty = file.metadata().map_err(anyhow::Error::from)?.len() == 0;
        let mut writer = csv::Writer::from_writer(file);
        if empty {
            writer.write_record(HEADER).map_err(anyhow::Error::from)?;
            writer.flush().map_err(anyhow::Error::from)?;
        }
        Ok(CsvSink { writer })
    }
}

fn row(record: &RepositoryRecord) -> [String; 8] {
    let optional = |value: Option<u64>| value.map(|value| value.to_string()).unwrap_or_default();
    [
        record.repo.to_string(),
        record.forks.to_string(),
        record.stars.to_string(),
        optional(record.contributors),
        optional(record.commits),
        record.last_updated_days.to_string(),
        optional(record.low_disclosure_contributors),
        record.topics.as_ref().map(|topics| topics.join(TOPIC_SEPARATOR)).unwrap_or_default(),
    ]
}

impl RecordSink for CsvSink {
    fn append(&mut self, record: &RepositoryRecord) -> Result<()> {
        self.writer.write_record(row(record)).map_err(anyhow::Error::from)?;
        self.writer.flush().map_err(anyhow::Error::from)?;
        Ok(())
    }
}
