//! Prompt construction for the remote analysis call.

/// Build the single analysis prompt for one article submission.
///
/// The reply is requested with exact labeled lines (`credibility score: N`,
/// `AI-generated likelihood: N%`) so the signal extractor can parse it
/// deterministically; free-form replies still degrade to defaults.
pub fn analysis_prompt(news_text: &str) -> String {
    format!(
        r#"Analyze the following news content:
{news}

Provide:
- A credibility score (0-100), on its own line formatted exactly as "credibility score: N"
- Fact-checking summary
- AI-generated likelihood (0-100%), on its own line formatted exactly as "AI-generated likelihood: N%"
- Any bias indicators"#,
        news = news_text
    )
}
