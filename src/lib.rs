mod args;
mod input;
mod output;

pub use args::Args;
pub use input::read_repo_list;
pub use output::{CsvSink, HEADER};

use github_client::{Credentials, GithubClientBuilder};
use log::info;
use repo_metrics::aggregator::RepoAggregator;
use repo_metrics::api::Result;
use repo_metrics::batch::{BatchRunner, RepoOutcome};
use std::time::Duration;

/// Collects the metrics of every repository listed in `args.input` into `args.output`.
pub async fn collect_repo_metrics(args: Args) -> Result<Vec<RepoOutcome>> {
    let repos = read_repo_list(&args.input)?;
    info!("Collecting metrics of {} repositories", repos.len());

    let mut client = GithubClientBuilder::default()
        .with_github_url(&args.api_url)
        .with_timeout(Duration::from_secs(args.timeout))
        .try_with_user_agent(&args.user_agent)?;
    if let Some(token) = args.github_token {
        let username = args.github_username.unwrap_or_default();
        client = client.with_credentials(Credentials::new(username, token));
    }
    let client = client.build()?;

    let mut sink = CsvSink::append_to(&args.output)?;
    let runner = BatchRunner::new(RepoAggregator::new(client, args.top_contributors, args.metrics));
    let outcomes = runner.run(repos, &mut sink).await;

    let collected = outcomes.iter().filter(|outcome| outcome.is_collected()).count();
    info!(
        "Collected {} repositories, skipped {}",
        collected,
        outcomes.len() - collected
    );
    Ok(outcomes)
}
