use repo_metrics::api::{Contributor as ApiContributor, RepoSummary, UserProfile};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub forks: u64,
    pub stargazers_count: u64,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
}

impl From<Repo> for RepoSummary {
    fn from(repo: Repo) -> Self {
        RepoSummary::new(repo.forks, repo.stargazers_count, repo.topics, repo.updated_at)
    }
}

/// Anonymous contributions come without a `login`.
#[derive(Deserialize, Debug)]
pub struct Contributor {
    pub login: Option<String>,
}

impl From<Contributor> for ApiContributor {
    fn from(contributor: Contributor) -> Self {
        contributor.login.map_or(ApiContributor::Anonymous, ApiContributor::User)
    }
}

#[derive(Deserialize, Debug)]
pub struct User {
    pub location: Option<String>,
    pub company: Option<String>,
    pub twitter_username: Option<String>,
    pub blog: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            location: user.location,
            company: user.company,
            twitter_username: user.twitter_username,
            blog: user.blog,
            email: user.email,
        }
    }
}
