use clap::Parser;
use repo_metrics::aggregator::Metric;
use secrecy::SecretString;
use std::{
    fmt::{Debug, Display},
    path::PathBuf,
    str::FromStr,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// File listing one repository reference per line, e.g. `https://github.com/psf/requests`
    #[clap(short, long, env = "REPO_METRICS_INPUT", default_value = "repos.txt")]
    pub input: PathBuf,

    /// CSV file the records are appended to
    #[clap(short, long, env = "REPO_METRICS_OUTPUT", default_value = "results.csv")]
    pub output: PathBuf,

    /// API account name
    #[clap(long, env)]
    pub github_username: Option<String>,

    /// API access token. Requests are unauthenticated without one.
    #[clap(long, env)]
    pub github_token: Option<SecretString>,

    /// Repository API URL
    #[clap(long, env = "REPO_METRICS_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// User-Agent sent with every request
    #[clap(long, env = "REPO_METRICS_USER_AGENT", default_value = "repo_metrics")]
    pub user_agent: String,

    /// Number of top contributors checked for identity disclosure
    #[clap(
        short,
        long,
        env = "REPO_METRICS_TOP_CONTRIBUTORS",
        default_value_t = 10,
        parse(try_from_str=top_contributors_in_range)
    )]
    pub top_contributors: usize,

    /// Request timeout in seconds
    #[clap(long, env = "REPO_METRICS_TIMEOUT", default_value_t = 30, parse(try_from_str=timeout_in_range))]
    pub timeout: u64,

    /// Metrics to collect besides stars, forks and last update
    #[clap(
        short,
        long,
        env = "REPO_METRICS_METRICS",
        use_value_delimiter = true,
        default_values = &["topics", "commits", "contributors", "low-disclosure"]
    )]
    pub metrics: Vec<Metric>,
}

fn top_contributors_in_range(value: &str) -> clap::Result<usize, String> {
    number_in_range(value, 1, 100, "top_contributors".to_string())
}

fn timeout_in_range(value: &str) -> clap::Result<u64, String> {
    number_in_range(value, 1, 600, "timeout".to_string())
}

fn number_in_range<T>(value: &str, min: T, max: T, name: String) -> clap::Result<T, String>
where
    T: FromStr + PartialOrd + Display,
    <T as FromStr>::Err: Display,
{
    value.parse::<T>().map_err(|err| format!("{}", err)).and_then(|value| {
        if value < min || value > max {
            return Err(format!("{} is not in range {} .. {}.", name, min, max));
        }
        Ok(value)
    })
}
