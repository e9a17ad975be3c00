//! Remote analysis client.
//!
//! One outbound call per submission to a generative-language endpoint. The
//! endpoint returns free-form natural language; recovery of structured
//! signals from it lives in [`crate::analysis::extractor`].

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::prompts;

/// Seam for the external analysis service, mockable in tests.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Send the article text for assessment and return the raw textual reply.
    async fn analyze(&self, article_text: &str) -> Result<String, AppError>;
}

/// Client for a Gemini-style `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
    request_timeout: Duration,
}

impl GeminiClient {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key: cfg.api_key.clone(),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait]
impl AnalysisBackend for GeminiClient {
    async fn analyze(&self, article_text: &str) -> Result<String, AppError> {
        let prompt = prompts::analysis_prompt(article_text);
        debug!("Requesting analysis ({} prompt chars)", prompt.len());

        let payload = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let request_future = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send();

        let res = timeout(self.request_timeout, request_future).await??;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Remote(format!(
                "analysis request failed with status {}: {}",
                status, body
            )));
        }

        let json: serde_json::Value = res.json().await?;

        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                AppError::Remote("analysis reply carried no candidate text".to_string())
            })?;

        info!("Analysis reply received ({} chars)", text.len());
        Ok(text.to_string())
    }
}
