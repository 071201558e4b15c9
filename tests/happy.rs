use chrono::{Duration, Utc};
use repo_metrics::aggregator::Metric;
use repo_metrics::api::Error;
use repo_metrics::batch::RepoOutcome;
use repo_metrics_app::collect_repo_metrics;
use repo_metrics_app::Args;
use std::fs;
use std::path::Path;
use tokio;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn failing_repo_is_left_out() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("repos.txt");
    let output = dir.path().join("results.csv");
    fs::write(&input, "https://github.com/acct/proj1\n\nwww.github.com/acct/proj2\n").unwrap();

    mock_repo(&server, "proj1", 5, 20, 10).await;
    mock_count(&server, "proj1", "commits", 40).await;
    mock_count(&server, "proj1", "contributors", 3).await;
    mock_contributors(&server, "proj1", &["a", "b", "c"]).await;
    for login in ["a", "b", "c"] {
        mock_user(&server, login, &format!(r#""email": "{}@example.com""#, login)).await;
    }

    mock_repo(&server, "proj2", 1, 1, 1).await;
    Mock::given(method("GET"))
        .and(path("/repos/acct/proj2/commits"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcomes = collect_repo_metrics(args(&server, &input, &output, Metric::all()))
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_collected());
    assert!(matches!(
        &outcomes[1],
        RepoOutcome::Skipped {
            reason: Error::Api { status: Some(500), .. },
            ..
        }
    ));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "repo_name,forks,stars,contributors,commits,last_updated_days,low_disclosure_contributors,topics\n\
         acct/proj1,5,20,3,40,10,0,rust;cli\n"
    );
}

#[tokio::test]
async fn low_disclosure_contributors_are_counted() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("repos.txt");
    let output = dir.path().join("results.csv");
    fs::write(&input, "https://github.com/acct/bots\n").unwrap();

    mock_repo(&server, "bots", 0, 2, 400).await;
    mock_count(&server, "bots", "commits", 12).await;
    mock_count(&server, "bots", "contributors", 2).await;
    mock_contributors(&server, "bots", &["bot", "human"]).await;
    mock_user(&server, "bot", r#""location": null, "blog": """#).await;
    mock_user(&server, "human", r#""twitter_username": "human""#).await;

    collect_repo_metrics(args(
        &server,
        &input,
        &output,
        vec![Metric::Commits, Metric::LowDisclosure],
    ))
    .await
    .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().nth(1), Some("acct/bots,0,2,,12,400,1,"));
}

fn args(server: &MockServer, input: &Path, output: &Path, metrics: Vec<Metric>) -> Args {
    Args {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        github_username: None,
        github_token: None,
        api_url: server.uri(),
        user_agent: "repo-metrics-test".to_string(),
        top_contributors: 10,
        timeout: 5,
        metrics,
    }
}

async fn mock_repo(server: &MockServer, name: &str, forks: u64, stars: u64, days_ago: i64) {
    let updated_at = (Utc::now() - Duration::days(days_ago) - Duration::hours(1)).format("%Y-%m-%dT%H:%M:%SZ");
    let body = format!(
        r#"{{
            "full_name": "acct/{}",
            "forks": {},
            "stargazers_count": {},
            "topics": ["rust", "cli"],
            "updated_at": "{}"
        }}"#,
        name, forks, stars, updated_at
    );
    Mock::given(method("GET"))
        .and(path(format!("/repos/acct/{}", name)))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .and(header("User-Agent", "repo-metrics-test"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

async fn mock_count(server: &MockServer, name: &str, collection: &str, count: u64) {
    let link = format!(
        r#"<{0}/repositories/7/{1}?per_page=1&page=2>; rel="next", <{0}/repositories/7/{1}?per_page=1&page={2}>; rel="last""#,
        server.uri(),
        collection,
        count
    );
    Mock::given(method("GET"))
        .and(path(format!("/repos/acct/{}/{}", name, collection)))
        .and(query_param("per_page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", link.as_str())
                .set_body_raw("[{}]", "application/json"),
        )
        .mount(server)
        .await;
}

async fn mock_contributors(server: &MockServer, name: &str, logins: &[&str]) {
    let body = logins
        .iter()
        .map(|login| format!(r#"{{ "login": "{}", "type": "User", "contributions": 1 }}"#, login))
        .collect::<Vec<_>>()
        .join(",");
    Mock::given(method("GET"))
        .and(path(format!("/repos/acct/{}/contributors", name)))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(format!("[{}]", body), "application/json"))
        .mount(server)
        .await;
}

async fn mock_user(server: &MockServer, login: &str, fields: &str) {
    let body = format!(r#"{{ "login": "{}", {} }}"#, login, fields);
    Mock::given(method("GET"))
        .and(path(format!("/users/{}", login)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}
