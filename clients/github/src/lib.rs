//! GitHub REST API implementation of [`repo_metrics::api::Client`].

mod builder;
mod error;
mod link;
mod payload;

pub use builder::{Credentials, GithubClientBuilder, DEFAULT_GITHUB_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};

use async_trait::async_trait;
use log::debug;
use repo_metrics::api::{self, Client, Collection, Contributor, RepoSummary, UserProfile};
use repo_metrics::identifier::RepoId;
use reqwest::{RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::{DeserializeOwned, IgnoredAny};

pub struct GithubClient {
    client: reqwest::Client,
    github_url: String,
    credentials: Option<Credentials>,
}

impl GithubClient {
    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(format!("{}{}", self.github_url, path));
        match &self.credentials {
            Some(credentials) => request.basic_auth(&credentials.username, Some(credentials.token.expose_secret())),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!("GET {} -> {}", response.url(), status);
        if !status.is_success() {
            return Err(Error::Status {
                url: response.url().to_string(),
                status,
            });
        }
        Ok(response)
    }

    /// Requests the first page with a page size of one, so the number of the last page is the
    /// collection size. Without a last page the collection has at most one item, which the body tells.
    async fn count_items(&self, path: &str, query: &[(&str, &str)]) -> Result<u64> {
        let response = self.send(self.get(path).query(&[("per_page", "1")]).query(query)).await?;
        let last_page = link::last_page(response.headers()).map_err(|reason| Error::Link {
            url: response.url().to_string(),
            reason,
        })?;
        if let Some(last_page) = last_page {
            return Ok(last_page);
        }
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(0);
        }
        let items = read_response::<Vec<IgnoredAny>>(response).await?;
        Ok(items.len() as u64)
    }
}

pub(crate) async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl Client for GithubClient {
    const MAX_CONTRIBUTORS_PAGE: u32 = 100;
    const FIRST_PAGE_NUMBER: u32 = 1;

    async fn repository(&self, repo: &RepoId) -> api::Result<RepoSummary> {
        let response = self.send(self.get(&format!("/repos/{}", repo))).await?;
        let repo = read_response::<payload::Repo>(response).await?;
        Ok(repo.into())
    }

    async fn count(&self, repo: &RepoId, collection: Collection) -> api::Result<u64> {
        let path = format!("/repos/{}/{}", repo, collection);
        let query: &[(&str, &str)] = match collection {
            Collection::Commits => &[],
            Collection::Contributors => &[("anon", "true")],
        };
        Ok(self.count_items(&path, query).await?)
    }

    async fn top_contributors(&self, repo: &RepoId, page: u32, per_page: u32) -> api::Result<Vec<Contributor>> {
        let request = self.get(&format!("/repos/{}/contributors", repo)).query(&[
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
            ("anon", "true".to_string()),
        ]);
        let response = self.send(request).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        let contributors = read_response::<Vec<payload::Contributor>>(response).await?;
        Ok(contributors.into_iter().map(Contributor::from).collect())
    }

    async fn user(&self, login: &str) -> api::Result<UserProfile> {
        let response = self.send(self.get(&format!("/users/{}", login))).await?;
        let user = read_response::<payload::User>(response).await?;
        Ok(user.into())
    }
}
