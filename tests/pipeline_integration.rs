//! End-to-end tests: live fetch against a mock server, extraction, and fallback.

use serp_signals::commands::AnalyzeCommand;
use serp_signals::config::{Config, OutputFormat};
use serp_signals::fixtures::FixtureGenerator;
use serp_signals::google::GoogleClient;
use serp_signals::models::ResultRecord;
use serp_signals::report::ShareOfVoice;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULTS_FIXTURE: &str = include_str!("fixtures/google_results.html");

fn make_config(num_results: usize) -> Config {
    Config { num_results, timeout_secs: 5, ..Config::default() }
}

async fn serve(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn fixture_json(keyword: &str, num_results: usize) -> String {
    serde_json::to_string(&FixtureGenerator::default().generate(keyword, num_results)).unwrap()
}

#[tokio::test]
async fn test_live_results_extracted() {
    let server = serve(200, RESULTS_FIXTURE).await;
    let config = make_config(10);
    let client = GoogleClient::with_base_url(&config, Some(server.uri())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let harvest = cmd.harvest(&client, "smart fan").await;
    assert!(!harvest.is_fallback());

    let records = harvest.records();
    assert_eq!(records.len(), 4);

    assert_eq!(records[0].title, "Atomberg Renesa Smart Fan - Official Store");
    assert_eq!(records[0].url, "https://www.atomberg.com/renesa");
    assert_eq!(records[0].brand, "Atomberg");
    assert_eq!(records[0].platform, "google");

    // Empty block keeps its slot with placeholders
    assert_eq!(records[1].title, "Result 2");
    assert_eq!(records[1].url, "No URL");
    assert_eq!(records[1].snippet, "");
    assert_eq!(records[1].brand, "Other");

    // Orient block has no h3; role heading is used
    assert_eq!(records[2].title, "Orient Electric Aeroquiet review");
    assert_eq!(records[2].brand, "Orient");

    let positions: Vec<usize> = records.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);

    assert_eq!(records[3].url, "No URL");
    assert_eq!(records[3].brand, "Other");
    // Rank 3 => 70 rank points plus the content bonus
    assert!(records[3].engagement_score >= 70.0 && records[3].engagement_score < 80.0);

    for record in records {
        assert!((0.0..=1.0).contains(&record.sentiment_score));
        assert_eq!(record.keyword, "smart fan");
    }
}

#[tokio::test]
async fn test_http_404_matches_fixture_output() {
    let server = serve(404, "not found").await;
    let config = make_config(7);
    let client = GoogleClient::with_base_url(&config, Some(server.uri())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let output = cmd.execute_with_client(&client, "tower fan").await;
    assert_eq!(output, fixture_json("tower fan", 7));
}

#[tokio::test]
async fn test_zero_blocks_under_both_selectors_falls_back() {
    let body = r#"<html><body><div class="tF2Cxc">Unrecognized layout</div></body></html>"#;
    let server = serve(200, body).await;
    let config = make_config(10);
    let client = GoogleClient::with_base_url(&config, Some(server.uri())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let output = cmd.execute_with_client(&client, "smart fan").await;
    assert_eq!(output, fixture_json("smart fan", 10));
}

#[tokio::test]
async fn test_span_snippet_truncated_to_200_chars() {
    let long_text = "é".repeat(250);
    let body = format!(
        r#"<html><body><div class="g"><a href="https://fans.example/x"><h3>Ceiling fans</h3></a><span>{}</span></div></body></html>"#,
        long_text
    );
    let server = serve(200, &body).await;
    let config = make_config(10);
    let client = GoogleClient::with_base_url(&config, Some(server.uri())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let harvest = cmd.harvest(&client, "fan").await;
    assert!(!harvest.is_fallback());

    let record = &harvest.records()[0];
    assert_eq!(record.snippet.chars().count(), 200);
    assert_eq!(record.snippet, "é".repeat(200));
}

#[tokio::test]
async fn test_connection_failure_falls_back() {
    // Nothing listens on port 1
    let config = make_config(3);
    let client =
        GoogleClient::with_base_url(&config, Some("http://127.0.0.1:1".to_string())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let output = cmd.execute_with_client(&client, "bldc fan").await;
    let parsed: Vec<ResultRecord> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(output, fixture_json("bldc fan", 3));
}

#[tokio::test]
async fn test_json_output_is_single_line_array() {
    let server = serve(200, RESULTS_FIXTURE).await;
    let config = make_config(10);
    let client = GoogleClient::with_base_url(&config, Some(server.uri())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let output = cmd.execute_with_client(&client, "smart fan").await;
    assert!(output.starts_with('['));
    assert!(!output.contains('\n'));
    assert!(output.contains("\"engagementScore\""));
    assert!(output.contains("\"sentimentScore\""));
}

#[tokio::test]
async fn test_share_of_voice_over_fallback_batch() {
    let server = serve(503, "").await;
    let config = Config { share_of_voice: true, ..make_config(10) };
    let client = GoogleClient::with_base_url(&config, Some(server.uri())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let output = cmd.execute_with_client(&client, "smart fan").await;
    let sov: ShareOfVoice = serde_json::from_str(&output).unwrap();
    assert_eq!(sov.keyword, "smart fan");
    assert_eq!(sov.total_results, 10);
    assert_eq!(sov.brand_metrics["Atomberg"].mentions, 5);
    assert_eq!(
        sov.focus_insights.unwrap().dominance,
        "Atomberg appears in 5 out of 10 results"
    );
}

#[tokio::test]
async fn test_csv_output() {
    let server = serve(200, RESULTS_FIXTURE).await;
    let config = Config { format: OutputFormat::Csv, ..make_config(10) };
    let client = GoogleClient::with_base_url(&config, Some(server.uri())).unwrap();
    let cmd = AnalyzeCommand::new(config);

    let output = cmd.execute_with_client(&client, "smart fan").await;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("1,"));
}
