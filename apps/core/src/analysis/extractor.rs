//! Signal extraction from the remote analysis reply.
//!
//! The reply is unstructured natural language with no fixed schema. Two
//! bounded integers are recovered by first-match pattern search; an absent
//! pattern is not an error and resolves to a documented default.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// Compile patterns once at startup. Label text is matched case-sensitively;
// the digit groups bound raw values to 0-999 before the explicit clamp.
static AI_LIKELIHOOD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AI-generated likelihood:\s*(\d{1,3})%")
        .expect("Invalid regex: AI likelihood pattern")
});

static CREDIBILITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"credibility score:\s*(\d{1,3})").expect("Invalid regex: credibility pattern")
});

/// Numeric signals recovered from one analysis reply.
///
/// Raw matches are kept as options so the presenter can skip charts whose
/// pattern never matched; the accessors apply the defaults (0 for the AI
/// likelihood, 50 for credibility) and the 0-100 clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSignals {
    pub ai_likelihood_raw: Option<u16>,
    pub credibility_raw: Option<u16>,
}

impl ExtractedSignals {
    /// AI-generated likelihood percentage; 0 when the pattern was absent.
    pub fn ai_likelihood(&self) -> u8 {
        self.ai_likelihood_raw.map_or(0, clamp_percent)
    }

    /// Credibility score; neutral 50 when the pattern was absent.
    pub fn credibility_score(&self) -> u8 {
        self.credibility_raw.map_or(50, clamp_percent)
    }

    /// Derived inverse of the credibility score.
    pub fn fake_content_level(&self) -> u8 {
        100 - self.credibility_score()
    }
}

fn clamp_percent(value: u16) -> u8 {
    value.min(100) as u8
}

/// Parse the analysis reply. Only the first match of each pattern counts;
/// later, possibly contradictory occurrences are ignored.
pub fn extract_signals(analysis_text: &str) -> ExtractedSignals {
    let ai_likelihood_raw = AI_LIKELIHOOD_PATTERN
        .captures(analysis_text)
        .and_then(|c| c[1].parse::<u16>().ok());

    let credibility_raw = CREDIBILITY_PATTERN
        .captures(analysis_text)
        .and_then(|c| c[1].parse::<u16>().ok());

    ExtractedSignals {
        ai_likelihood_raw,
        credibility_raw,
    }
}
