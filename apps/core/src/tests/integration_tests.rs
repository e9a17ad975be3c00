//! Integration Tests
//!
//! End-to-end tests that verify the complete submission pipeline: article
//! text in, remote call over HTTP (mocked), rendered report and chart files
//! out.

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::analysis::sentiment::BiasVerdict;
use crate::analysis::NewsAnalyzer;
use crate::config::AppConfig;
use crate::remote::GeminiClient;
use crate::render;
use crate::text_source::ArticleText;

// ============================================================================
// Test Fixtures
// ============================================================================

fn test_config(server_url: &str) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.api_key = "integration-key".to_string();
    cfg.api_base = server_url.to_string();
    cfg.request_timeout_secs = 5;
    cfg
}

fn candidate_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

async fn mount_reply(server: &MockServer, reply: &str) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply(reply)))
        .mount(server)
        .await;
}

// ============================================================================
// Pipeline
// ============================================================================

#[tokio::test]
async fn test_full_pipeline_with_both_signals() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        "This article shows several hallmarks of machine authorship.\n\
         AI-generated likelihood: 73%\n\
         credibility score: 40\n\
         Bias indicators: emotionally loaded vocabulary.",
    )
    .await;

    let cfg = test_config(&server.uri());
    let analyzer = NewsAnalyzer::new(&cfg);
    let backend = GeminiClient::new(&cfg);

    let article = ArticleText::from_pasted(
        "A shocking disaster exposed the corrupt and manipulative regime propaganda.",
    );
    let report = analyzer
        .analyze(&article, &backend)
        .await
        .expect("pipeline should succeed");

    assert_eq!(report.signals.ai_likelihood(), 73);
    assert_eq!(report.signals.credibility_score(), 40);
    assert_eq!(report.signals.fake_content_level(), 60);
    assert_eq!(report.sentiment.verdict, BiasVerdict::NegativeBias);

    let words: Vec<&str> = report
        .highlighted
        .spans
        .iter()
        .map(|s| s.word.as_str())
        .collect();
    assert_eq!(
        words,
        vec!["shocking", "disaster", "corrupt", "manipulative", "propaganda"]
    );

    let rendered = render::render_report(&report);
    assert!(rendered.contains("machine authorship"));
    assert!(rendered.contains("AI-Generated: 73%"));
    assert!(rendered.contains("Fake Content Level: 60 / 100"));
    assert!(rendered.contains("Potential Negative Bias Detected!"));
}

#[tokio::test]
async fn test_article_text_reaches_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("quarterly budget meeting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply(
            "credibility score: 90\nLooks routine.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let cfg = test_config(&server.uri());
    let analyzer = NewsAnalyzer::new(&cfg);
    let backend = GeminiClient::new(&cfg);

    let article = ArticleText::from_pasted("Minutes from the quarterly budget meeting.");
    let report = analyzer
        .analyze(&article, &backend)
        .await
        .expect("pipeline should succeed");

    assert_eq!(report.signals.credibility_score(), 90);
    assert_eq!(report.sentiment.verdict, BiasVerdict::NoStrongBias);
}

#[tokio::test]
async fn test_remote_failure_degrades_to_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let cfg = test_config(&server.uri());
    let analyzer = NewsAnalyzer::new(&cfg);
    let backend = GeminiClient::new(&cfg);

    let article = ArticleText::from_pasted("Some article text.");
    let report = analyzer
        .analyze(&article, &backend)
        .await
        .expect("failure must degrade, not propagate");

    assert!(report.analysis_text.starts_with("Error fetching analysis:"));
    assert!(report.analysis_text.contains("401"));
    assert_eq!(report.signals.ai_likelihood(), 0);
    assert_eq!(report.signals.credibility_score(), 50);
    assert_eq!(report.signals.fake_content_level(), 50);

    // The rendered report shows the error text in place of the analysis and
    // skips both charts.
    let rendered = render::render_report(&report);
    assert!(rendered.contains("Error fetching analysis:"));
    assert!(!rendered.contains("## AI Content Analysis"));
    assert!(!rendered.contains("## Fake Content Level"));
}

#[tokio::test]
async fn test_uploaded_text_file_pipeline() {
    let server = MockServer::start().await;
    mount_reply(&server, "AI-generated likelihood: 5%\ncredibility score: 95").await;

    let cfg = test_config(&server.uri());
    let analyzer = NewsAnalyzer::new(&cfg);
    let backend = GeminiClient::new(&cfg);

    let article = ArticleText::from_upload(
        "article.txt",
        b"Council approves park renovation after public consultation.",
    )
    .expect("upload should decode");

    let report = analyzer
        .analyze(&article, &backend)
        .await
        .expect("pipeline should succeed");

    assert_eq!(report.signals.fake_content_level(), 5);

    let dir = tempfile::tempdir().expect("temp dir");
    render::write_charts(dir.path(), &report).expect("charts should write");
    assert!(dir.path().join("chart.ai_detection.json").exists());
    assert!(dir.path().join("chart.fake_level.json").exists());
}

#[tokio::test]
async fn test_reused_analyzer_keeps_no_state() {
    let server = MockServer::start().await;
    mount_reply(&server, "credibility score: 20").await;

    let cfg = test_config(&server.uri());
    let analyzer = NewsAnalyzer::new(&cfg);
    let backend = GeminiClient::new(&cfg);

    let first = analyzer
        .analyze(&ArticleText::from_pasted("first article"), &backend)
        .await
        .expect("first submission");
    let second = analyzer
        .analyze(&ArticleText::from_pasted("second article"), &backend)
        .await
        .expect("second submission");

    assert_ne!(first.id, second.id);
    assert_eq!(first.signals, second.signals);
}
