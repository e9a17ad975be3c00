//! Sentiment-based bias detection.
//!
//! A lexicon polarity scorer produces a compound score in [-1.0, 1.0]
//! (signed word valences with negation flipping and booster scaling, the sum
//! normalized by `s / sqrt(s*s + 15)`), which fixed cut points map to one of
//! three bias verdicts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::config::SentimentThresholds;

/// Signed valences for sentiment-bearing words, on a -4..4 scale.
const VALENCE_LEXICON: &[(&str, f64)] = &[
    // Strongly negative
    ("disaster", -3.1),
    ("catastrophe", -3.4),
    ("tragedy", -3.4),
    ("horrible", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("dreadful", -2.3),
    ("devastating", -2.9),
    ("atrocity", -3.3),
    ("crisis", -2.4),
    ("corrupt", -2.7),
    ("corruption", -2.7),
    ("fraud", -2.8),
    ("fraudulent", -2.8),
    ("scandal", -2.2),
    ("scandalous", -2.2),
    ("fake", -1.9),
    ("hoax", -2.0),
    ("lie", -1.8),
    ("lies", -1.8),
    ("lying", -2.0),
    ("deceit", -2.2),
    ("deceptive", -2.1),
    ("manipulative", -2.0),
    ("manipulation", -1.9),
    ("propaganda", -1.8),
    ("biased", -1.4),
    ("misleading", -1.8),
    ("dishonest", -2.2),
    ("shocking", -1.3),
    ("outrage", -2.1),
    ("outrageous", -2.0),
    ("scam", -2.6),
    ("crime", -2.5),
    ("criminal", -2.4),
    ("violence", -2.9),
    ("violent", -2.7),
    ("attack", -2.1),
    ("threat", -1.9),
    ("danger", -2.2),
    ("dangerous", -2.2),
    ("fear", -1.9),
    ("panic", -2.3),
    ("chaos", -2.2),
    ("collapse", -2.1),
    ("failure", -2.0),
    ("failed", -1.8),
    ("fail", -1.8),
    ("loss", -1.3),
    ("worst", -3.1),
    ("bad", -1.5),
    ("worse", -2.1),
    ("wrong", -1.4),
    ("poor", -1.5),
    ("sad", -1.6),
    ("angry", -1.8),
    ("anger", -1.8),
    ("hate", -2.7),
    ("hatred", -3.0),
    ("war", -2.9),
    ("death", -2.9),
    ("dead", -2.6),
    ("killed", -3.0),
    ("kill", -2.9),
    ("destroy", -2.5),
    ("destroyed", -2.5),
    ("destruction", -2.6),
    ("ruin", -2.1),
    ("blame", -1.4),
    ("guilty", -1.8),
    ("illegal", -1.9),
    ("unfair", -1.7),
    ("abuse", -2.8),
    ("suffering", -2.4),
    ("victim", -1.6),
    ("warning", -1.1),
    ("problem", -1.3),
    ("damage", -1.9),
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 3.2),
    ("outstanding", 3.0),
    ("wonderful", 2.7),
    ("amazing", 2.8),
    ("fantastic", 2.6),
    ("superb", 3.0),
    ("remarkable", 1.7),
    ("best", 3.2),
    ("better", 1.9),
    ("positive", 2.0),
    ("success", 2.7),
    ("successful", 2.8),
    ("win", 2.8),
    ("won", 2.7),
    ("victory", 2.9),
    ("triumph", 2.9),
    ("progress", 1.8),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("growth", 1.6),
    ("thriving", 2.4),
    ("prosperity", 2.5),
    ("hope", 1.9),
    ("hopeful", 2.0),
    ("promising", 1.9),
    ("praise", 2.3),
    ("praised", 2.3),
    ("celebrated", 2.4),
    ("honest", 2.3),
    ("trustworthy", 2.4),
    ("reliable", 2.0),
    ("credible", 1.8),
    ("accurate", 1.7),
    ("fair", 1.7),
    ("strong", 1.6),
    ("safe", 1.8),
    ("benefit", 1.8),
    ("happy", 2.7),
    ("joy", 2.8),
    ("love", 3.2),
    ("peace", 2.5),
    ("support", 1.7),
    ("welcome", 2.0),
    ("breakthrough", 2.2),
    ("innovative", 1.9),
    ("inspiring", 2.4),
    ("generous", 2.3),
];

/// Words that flip the valence of a following sentiment word.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "can't", "won't", "don't",
    "doesn't", "didn't", "isn't", "wasn't", "aren't", "hardly", "without",
];

/// Intensity modifiers and their scaling increments.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("absolutely", 0.293),
    ("utterly", 0.293),
    ("totally", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("highly", 0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("barely", -0.293),
    ("marginally", -0.293),
];

/// Dampening applied to a negated valence.
const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding tokens are inspected for negators and boosters.
const MODIFIER_WINDOW: usize = 3;

struct Lexicon {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

// One-time process-wide lexicon setup; idempotent, no teardown.
static LEXICON: OnceLock<Lexicon> = OnceLock::new();

fn lexicon() -> &'static Lexicon {
    LEXICON.get_or_init(|| Lexicon {
        valences: VALENCE_LEXICON.iter().copied().collect(),
        boosters: BOOSTERS.iter().copied().collect(),
    })
}

/// Three-way bias verdict derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasVerdict {
    NegativeBias,
    PositiveBias,
    NoStrongBias,
}

impl fmt::Display for BiasVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BiasVerdict::NegativeBias => "Potential Negative Bias Detected!",
            BiasVerdict::PositiveBias => "Potential Positive Bias Detected!",
            BiasVerdict::NoStrongBias => "No strong bias detected.",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of sentiment classification for one text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentOutcome {
    /// Compound polarity score in [-1.0, 1.0].
    pub compound: f64,
    pub verdict: BiasVerdict,
}

/// Lexicon polarity scorer plus threshold classifier.
pub struct SentimentClassifier {
    thresholds: SentimentThresholds,
}

impl SentimentClassifier {
    pub fn new(thresholds: SentimentThresholds) -> Self {
        Self { thresholds }
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }

    /// Compute the compound polarity score for a text.
    pub fn compound(&self, text: &str) -> f64 {
        let lex = lexicon();
        let tokens = Self::tokenize(text);
        let mut sum = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = lex.valences.get(token.as_str()) else {
                continue;
            };

            let mut adjusted = valence;
            let window_start = i.saturating_sub(MODIFIER_WINDOW);
            for prev in &tokens[window_start..i] {
                if NEGATORS.contains(&prev.as_str()) {
                    adjusted *= NEGATION_SCALAR;
                } else if let Some(&boost) = lex.boosters.get(prev.as_str()) {
                    adjusted += boost * adjusted.signum();
                }
            }

            sum += adjusted;
        }

        if sum == 0.0 {
            return 0.0;
        }

        let compound = sum / (sum * sum + 15.0).sqrt();
        compound.clamp(-1.0, 1.0)
    }

    /// Apply the cut points, in this exact order: negative, positive, neutral.
    pub fn classify(&self, text: &str) -> SentimentOutcome {
        let compound = self.compound(text);

        let verdict = if compound < self.thresholds.negative {
            BiasVerdict::NegativeBias
        } else if compound > self.thresholds.positive {
            BiasVerdict::PositiveBias
        } else {
            BiasVerdict::NoStrongBias
        };

        SentimentOutcome { compound, verdict }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(SentimentThresholds::default())
    }
}
