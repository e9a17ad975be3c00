//! Bias word highlighting.
//!
//! Scans article text for a configurable vocabulary of bias-signaling words
//! and records every case-insensitive whole-word occurrence. The underlying
//! characters are never altered; highlighting is a rendering annotation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One whole-word lexicon match inside the article text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightSpan {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched text as it appears in the article.
    pub word: String,
    /// Highlight class from the lexicon configuration.
    pub class: String,
}

/// Article text plus its highlight annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightedText {
    pub text: String,
    pub spans: Vec<HighlightSpan>,
}

impl HighlightedText {
    /// Render the text with each span wrapped in a `<mark>` marker.
    pub fn to_marked(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;

        for span in &self.spans {
            out.push_str(&self.text[cursor..span.start]);
            out.push_str(&format!(
                "<mark class=\"{}\">{}</mark>",
                span.class, span.word
            ));
            cursor = span.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

/// Matcher over a fixed word → highlight-class lexicon.
pub struct BiasHighlighter {
    pattern: Option<Regex>,
    classes: BTreeMap<String, String>,
}

impl BiasHighlighter {
    /// Build a matcher from a lexicon. Words are matched case-insensitively
    /// at word boundaries (non-alphanumeric or string edge), so "fakeness"
    /// does not match "fake".
    pub fn new(lexicon: &BTreeMap<String, String>) -> Self {
        let classes: BTreeMap<String, String> = lexicon
            .iter()
            .map(|(w, c)| (w.to_lowercase(), c.clone()))
            .collect();

        let pattern = if classes.is_empty() {
            None
        } else {
            let alternation = classes
                .keys()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                Regex::new(&format!(r"(?i)\b({})\b", alternation))
                    .expect("Invalid regex: bias lexicon pattern"),
            )
        };

        Self { pattern, classes }
    }

    /// Find every lexicon occurrence in `text`.
    pub fn highlight(&self, text: &str) -> HighlightedText {
        let spans = match &self.pattern {
            Some(pattern) => pattern
                .find_iter(text)
                .map(|m| {
                    let class = self
                        .classes
                        .get(&m.as_str().to_lowercase())
                        .cloned()
                        .unwrap_or_else(|| "bias-word".to_string());
                    HighlightSpan {
                        start: m.start(),
                        end: m.end(),
                        word: m.as_str().to_string(),
                        class,
                    }
                })
                .collect(),
            None => vec![],
        };

        HighlightedText {
            text: text.to_string(),
            spans,
        }
    }
}
