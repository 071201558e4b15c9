use clap::Parser;
use repo_metrics::api::Error;
use repo_metrics_app::Args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    repo_metrics_app::collect_repo_metrics(args).await?;

    Ok(())
}
