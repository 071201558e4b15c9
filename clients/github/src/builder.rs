use crate::GithubClient;
use crate::Result;
use derive_more::Constructor;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use secrecy::SecretString;
use std::time::Duration;

pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Basic auth pair. GitHub accepts an access token as the password.
#[derive(Constructor, Debug)]
pub struct Credentials {
    pub(crate) username: String,
    pub(crate) token: SecretString,
}

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    github_url: String,
    headers: HeaderMap,
    credentials: Option<Credentials>,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::default();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("repo_metrics"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        Self {
            client_builder: ClientBuilder::default().timeout(DEFAULT_TIMEOUT),
            github_url: DEFAULT_GITHUB_URL.to_string(),
            headers,
            credentials: None,
        }
    }
}

impl GithubClientBuilder {
    pub fn with_credentials(mut self, credentials: Credentials) -> GithubClientBuilder {
        self.credentials = Some(credentials);
        self
    }

    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_github_url<STR: AsRef<str>>(mut self, url: STR) -> GithubClientBuilder {
        self.github_url = url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Bounds every request, connecting included.
    pub fn with_timeout(mut self, timeout: Duration) -> GithubClientBuilder {
        self.client_builder = self.client_builder.timeout(timeout);
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<GithubClientBuilder> {
        let val = HeaderValue::from_str(val.as_ref())?;
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self) -> Result<GithubClient> {
        let client = self.client_builder.default_headers(self.headers).build()?;
        Ok(GithubClient {
            client,
            github_url: self.github_url,
            credentials: self.credentials,
        })
    }
}
