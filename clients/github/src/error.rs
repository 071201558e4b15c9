use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid Link header in response from {url}: {reason}")]
    Link { url: String, reason: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for repo_metrics::api::Error {
    fn from(err: Error) -> Self {
        use repo_metrics::api::Error::{Api, Other};
        match err {
            Error::Status { url, status } => Api {
                url,
                status: Some(status.as_u16()),
                reason: None,
            },
            Error::Request(err) => Api {
                url: err.url().map(|url| url.to_string()).unwrap_or_default(),
                status: err.status().map(|status| status.as_u16()),
                reason: Some(err.to_string()),
            },
            Error::Link { url, reason } => Api {
                url,
                status: None,
                reason: Some(format!("invalid Link header, {}", reason)),
            },
            Error::Other(err) => Other(err),
        }
    }
}
