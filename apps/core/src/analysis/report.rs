//! Analysis report - output structure for one submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bias_lexicon::HighlightedText;
use super::extractor::ExtractedSignals;
use super::sentiment::SentimentOutcome;
use crate::text_source::ArticleText;

/// Everything the presenter needs for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique id for this submission.
    pub id: Uuid,

    /// The article as submitted.
    pub article: ArticleText,

    /// Raw textual reply from the remote endpoint, or the sentinel error
    /// string when the call failed.
    pub analysis_text: String,

    /// Signals recovered from the analysis text.
    pub signals: ExtractedSignals,

    /// Article text annotated with bias-word highlights.
    pub highlighted: HighlightedText,

    /// Compound polarity score and derived verdict.
    pub sentiment: SentimentOutcome,

    /// Processing time in milliseconds, remote call included.
    pub processing_time_ms: u64,

    /// Timestamp of analysis.
    pub timestamp: DateTime<Utc>,
}

impl AnalysisReport {
    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "AI: {}%, Credibility: {}, Fake level: {}, Bias words: {}, Verdict: {:?}, Time: {}ms",
            self.signals.ai_likelihood(),
            self.signals.credibility_score(),
            self.signals.fake_content_level(),
            self.highlighted.spans.len(),
            self.sentiment.verdict,
            self.processing_time_ms
        )
    }
}
