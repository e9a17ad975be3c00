//! News analyzer - main orchestrator for one submission.
//!
//! Runs the remote assessment, signal extraction, bias highlighting and
//! sentiment classification, and assembles the report. The bias highlighter
//! and the sentiment classifier work on the raw article text, independently
//! of the remote reply.

use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use super::bias_lexicon::BiasHighlighter;
use super::extractor;
use super::report::AnalysisReport;
use super::sentiment::SentimentClassifier;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::remote::AnalysisBackend;
use crate::text_source::ArticleText;

pub struct NewsAnalyzer {
    highlighter: BiasHighlighter,
    sentiment: SentimentClassifier,
}

impl NewsAnalyzer {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            highlighter: BiasHighlighter::new(&cfg.bias_lexicon),
            sentiment: SentimentClassifier::new(cfg.thresholds),
        }
    }

    /// Analyze one submission end to end.
    ///
    /// A blank submission is rejected before any network traffic. A failing
    /// remote call is not an error at this level: its message becomes the
    /// displayed analysis text and extraction falls through to defaults.
    pub async fn analyze(
        &self,
        article: &ArticleText,
        backend: &dyn AnalysisBackend,
    ) -> Result<AnalysisReport, AppError> {
        if article.is_blank() {
            return Err(AppError::Validation(
                "Please enter some text to analyze.".to_string(),
            ));
        }

        let start = Instant::now();

        let analysis_text = match backend.analyze(article.as_str()).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Remote analysis failed: {}", e);
                format!("Error fetching analysis: {}", e)
            }
        };

        let signals = extractor::extract_signals(&analysis_text);
        let highlighted = self.highlighter.highlight(article.as_str());
        let sentiment = self.sentiment.classify(article.as_str());

        let report = AnalysisReport {
            id: Uuid::new_v4(),
            article: article.clone(),
            analysis_text,
            signals,
            highlighted,
            sentiment,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };

        info!("Submission {} analyzed: {}", report.id, report.summary());
        Ok(report)
    }
}
