//! # Analysis Module
//!
//! Local and remote-derived analysis for NewsCheck.
//! Turns a raw article submission into a structured, displayable report.
//!
//! ## Components
//! - `bias_lexicon`: whole-word bias vocabulary highlighting
//! - `sentiment`: compound polarity scoring and threshold verdicts
//! - `extractor`: numeric signal recovery from the remote reply
//! - `report`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod bias_lexicon;
pub mod extractor;
pub mod report;
pub mod sentiment;

pub use analyzer::NewsAnalyzer;
pub use bias_lexicon::{BiasHighlighter, HighlightSpan, HighlightedText};
pub use extractor::{extract_signals, ExtractedSignals};
pub use report::AnalysisReport;
pub use sentiment::{BiasVerdict, SentimentClassifier, SentimentOutcome};
