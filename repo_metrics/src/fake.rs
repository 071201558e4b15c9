//! In-memory `Client` for tests. Unknown resources answer with a 404 `Api` error.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::api::{Client, Collection, Contributor, Error, RepoSummary, Result, UserProfile};
use crate::identifier::RepoId;

#[derive(Default)]
pub(crate) struct FakeClient {
    repos: HashMap<RepoId, RepoSummary>,
    counts: HashMap<(RepoId, Collection), u64>,
    contributors: HashMap<RepoId, Vec<Contributor>>,
    users: HashMap<String, UserProfile>,
    requests: Mutex<Vec<String>>,
}

impl FakeClient {
    pub(crate) fn with_repo(mut self, repo: RepoId, summary: RepoSummary) -> Self {
        self.repos.insert(repo, summary);
        self
    }

    pub(crate) fn with_count(mut self, repo: RepoId, collection: Collection, count: u64) -> Self {
        self.counts.insert((repo, collection), count);
        self
    }

    pub(crate) fn with_contributors(mut self, repo: RepoId, contributors: Vec<Contributor>) -> Self {
        self.contributors.insert(repo, contributors);
        self
    }

    pub(crate) fn with_user(mut self, login: &str, profile: UserProfile) -> Self {
        self.users.insert(login.to_string(), profile);
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) -> String {
        self.requests.lock().unwrap().push(request.clone());
        request
    }
}

/// `updated_at` timestamp lying `days` and one hour in the past.
pub(crate) fn updated_days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days) - Duration::hours(1))
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

fn not_found<T>(url: String) -> Result<T> {
    Err(Error::Api {
        url,
        status: Some(404),
        reason: None,
    })
}

#[async_trait]
impl Client for FakeClient {
    const MAX_CONTRIBUTORS_PAGE: u32 = 100;
    const FIRST_PAGE_NUMBER: u32 = 1;

    async fn repository(&self, repo: &RepoId) -> Result<RepoSummary> {
        let url = self.record(format!("GET /repos/{}", repo));
        self.repos.get(repo).cloned().map_or_else(|| not_found(url), Ok)
    }

    async fn count(&self, repo: &RepoId, collection: Collection) -> Result<u64> {
        let url = self.record(format!("GET /repos/{}/{}?per_page=1", repo, collection));
        let count = self.counts.get(&(repo.clone(), collection)).copied();
        count.map_or_else(|| not_found(url), Ok)
    }

    async fn top_contributors(&self, repo: &RepoId, page: u32, per_page: u32) -> Result<Vec<Contributor>> {
        let url = self.record(format!(
            "GET /repos/{}/contributors?page={}&per_page={}",
            repo, page, per_page
        ));
        match self.contributors.get(repo) {
            Some(contributors) => Ok(contributors.iter().take(per_page as usize).cloned().collect()),
            None => not_found(url),
        }
    }

    async fn user(&self, login: &str) -> Result<UserProfile> {
        let url = self.record(format!("GET /users/{}", login));
        self.users.get(login).cloned().map_or_else(|| not_found(url), Ok)
    }
}
