//! Report presentation.
//!
//! Renders the fixed-order text report and writes the two chart
//! specifications as JSON files ready for a front end to draw.
//! Section order: analysis text, AI chart, fake-content chart, bias
//! highlighting, sentiment verdict.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::analysis::AnalysisReport;

/// Two-slice proportion chart: AI-generated vs human-written share.
#[derive(Debug, Clone, Serialize)]
pub struct PieChartSpec {
    pub labels: [&'static str; 2],
    pub sizes: [u8; 2],
    pub colors: [&'static str; 2],
    pub start_angle: u16,
}

impl PieChartSpec {
    pub fn ai_detection(ai_likelihood: u8) -> Self {
        Self {
            labels: ["AI-Generated", "Human-Written"],
            sizes: [ai_likelihood, 100 - ai_likelihood],
            colors: ["#FF9999", "#66B2FF"],
            start_angle: 90,
        }
    }
}

/// Single-bar level indicator on a 0-100 scale.
#[derive(Debug, Clone, Serialize)]
pub struct BarChartSpec {
    pub title: &'static str,
    pub label: &'static str,
    pub value: u8,
    pub color: &'static str,
    pub axis_max: u8,
}

impl BarChartSpec {
    pub fn fake_content_level(level: u8) -> Self {
        Self {
            title: "Fake News Probability",
            label: "Fake Content Level",
            value: level,
            color: "#FF5733",
            axis_max: 100,
        }
    }
}

/// Render the complete report text in its fixed presentation order.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("## Analysis Results\n\n");
    out.push_str(report.analysis_text.trim());
    out.push('\n');

    if report.signals.ai_likelihood_raw.is_some() {
        let ai = report.signals.ai_likelihood();
        out.push_str("\n## AI Content Analysis\n");
        out.push_str(&format!(
            "AI-Generated: {}% | Human-Written: {}%\n",
            ai,
            100 - ai
        ));
    }

    if report.signals.credibility_raw.is_some() {
        out.push_str("\n## Fake Content Level\n");
        out.push_str(&format!(
            "Fake Content Level: {} / 100\n",
            report.signals.fake_content_level()
        ));
    }

    out.push_str("\n## Bias Detection\n");
    out.push_str(&report.highlighted.to_marked());
    out.push('\n');

    out.push_str(&format!("\n{}\n", report.sentiment.verdict));

    out
}

/// Write the chart-spec JSONs for one report into `out_dir`. A chart file is
/// written only when its source pattern matched.
pub fn write_charts(out_dir: &Path, report: &AnalysisReport) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {:?}", out_dir))?;

    if report.signals.ai_likelihood_raw.is_some() {
        let pie = PieChartSpec::ai_detection(report.signals.ai_likelihood());
        write_json(out_dir.join("chart.ai_detection.json"), &pie)?;
    }

    if report.signals.credibility_raw.is_some() {
        let bar = BarChartSpec::fake_content_level(report.signals.fake_content_level());
        write_json(out_dir.join("chart.fake_level.json"), &bar)?;
    }

    Ok(())
}

fn write_json<T: Serialize>(path: std::path::PathBuf, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    fs::write(&path, body).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sentiment::{BiasVerdict, SentimentOutcome};
    use crate::analysis::{extract_signals, BiasHighlighter};
    use crate::config::AppConfig;
    use crate::text_source::ArticleText;
    use chrono::Utc;
    use uuid::Uuid;

    fn report_for(article: &str, analysis: &str) -> AnalysisReport {
        let cfg = AppConfig::default();
        AnalysisReport {
            id: Uuid::new_v4(),
            article: ArticleText::from_pasted(article),
            analysis_text: analysis.to_string(),
            signals: extract_signals(analysis),
            highlighted: BiasHighlighter::new(&cfg.bias_lexicon).highlight(article),
            sentiment: SentimentOutcome {
                compound: 0.0,
                verdict: BiasVerdict::NoStrongBias,
            },
            processing_time_ms: 1,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_section_order() {
        let report = report_for(
            "a fake story",
            "Looks dubious.\nAI-generated likelihood: 60%\ncredibility score: 30",
        );
        let text = render_report(&report);

        let analysis_pos = text.find("## Analysis Results").unwrap();
        let ai_pos = text.find("## AI Content Analysis").unwrap();
        let fake_pos = text.find("## Fake Content Level").unwrap();
        let bias_pos = text.find("## Bias Detection").unwrap();
        let verdict_pos = text.find("No strong bias detected.").unwrap();

        assert!(analysis_pos < ai_pos);
        assert!(ai_pos < fake_pos);
        assert!(fake_pos < bias_pos);
        assert!(bias_pos < verdict_pos);
    }

    #[test]
    fn test_unmatched_signals_render_no_charts() {
        let report = report_for("plain text", "no numbers here");
        let text = render_report(&report);

        assert!(!text.contains("## AI Content Analysis"));
        assert!(!text.contains("## Fake Content Level"));
        assert!(text.contains("## Bias Detection"));
    }

    #[test]
    fn test_highlight_marks_present() {
        let report = report_for("pure propaganda", "credibility score: 10");
        let text = render_report(&report);
        assert!(text.contains("<mark class=\"bias-word\">propaganda</mark>"));
    }

    #[test]
    fn test_pie_spec_slices() {
        let pie = PieChartSpec::ai_detection(73);
        assert_eq!(pie.sizes, [73, 27]);
        assert_eq!(pie.labels, ["AI-Generated", "Human-Written"]);
    }

    #[test]
    fn test_write_charts_conditional() {
        let dir = tempfile::tempdir().expect("temp dir");

        // Only credibility matched: bar file, no pie file.
        let report = report_for("text", "credibility score: 40");
        write_charts(dir.path(), &report).expect("should write");

        assert!(!dir.path().join("chart.ai_detection.json").exists());
        let bar_raw = std::fs::read_to_string(dir.path().join("chart.fake_level.json"))
            .expect("bar file should exist");
        assert!(bar_raw.contains("\"value\": 60"));
    }
}
