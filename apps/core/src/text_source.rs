//! Article text acquisition.
//!
//! An [`ArticleText`] is created once per submission, either from a pasted
//! text box or from an uploaded document (plain text or PDF), and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AppError;

/// Where the article text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOrigin {
    Pasted,
    UploadedText,
    UploadedPdf,
}

/// Immutable article text for a single submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleText {
    text: String,
    origin: TextOrigin,
}

impl ArticleText {
    /// Wrap text pasted directly into the input field.
    pub fn from_pasted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: TextOrigin::Pasted,
        }
    }

    /// Decode an uploaded document into article text.
    ///
    /// The content type is detected from the byte signature first, with the
    /// file extension as fallback. Only plain text and PDF are accepted.
    pub fn from_upload(file_name: &str, file_data: &[u8]) -> Result<Self, AppError> {
        let kind = detect_kind(file_name, file_data);
        info!("Decoding upload: {} (type: {:?})", file_name, kind);

        match kind {
            UploadKind::Text => {
                let text = String::from_utf8(file_data.to_vec())
                    .map_err(|e| AppError::Decode(format!("invalid UTF-8 content: {}", e)))?;
                Ok(Self {
                    text: clean_extracted_text(&text),
                    origin: TextOrigin::UploadedText,
                })
            }
            UploadKind::Pdf => {
                let text = extract_pdf_text(file_data)?;
                Ok(Self {
                    text,
                    origin: TextOrigin::UploadedPdf,
                })
            }
            UploadKind::Unsupported(ext) => Err(AppError::Decode(format!(
                "unsupported document type: {}",
                ext
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[allow(dead_code)]
    pub fn origin(&self) -> TextOrigin {
        self.origin
    }

    /// True when the submission carries no analyzable text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug)]
enum UploadKind {
    Text,
    Pdf,
    Unsupported(String),
}

fn detect_kind(file_name: &str, file_data: &[u8]) -> UploadKind {
    // Byte signature is more trustworthy than the file name.
    if let Some(kind) = infer::get(file_data) {
        return match kind.mime_type() {
            "application/pdf" => UploadKind::Pdf,
            other => UploadKind::Unsupported(other.to_string()),
        };
    }

    // No recognizable signature: plain text has none, so fall back to
    // the extension.
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "" => UploadKind::Text,
        "pdf" => UploadKind::Pdf,
        other => UploadKind::Unsupported(other.to_string()),
    }
}

/// Extract text from a PDF document. Pages without extractable text simply
/// contribute nothing; page texts are joined by newlines during cleanup.
fn extract_pdf_text(file_data: &[u8]) -> Result<String, AppError> {
    match pdf_extract::extract_text_from_mem(file_data) {
        Ok(text) => {
            let cleaned = clean_extracted_text(&text);
            info!("PDF extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("PDF extraction failed: {}", e);
            Err(AppError::Decode(format!("failed to extract PDF text: {}", e)))
        }
    }
}

/// Clean up extracted text: trim lines, drop empty ones.
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
