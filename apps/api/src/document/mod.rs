//! Document text extraction for uploaded résumés (PDF, DOCX, plain text).
//!
//! Sits outside the analysis engine: callers turn any `DocumentError` into empty
//! text, which the analyzer reports as an unreadable résumé.

mod docx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported document type: {0}")]
    Unsupported(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, DocumentError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" => Ok(Self::Text),
            _ => Err(DocumentError::Unsupported(filename.to_string())),
        }
    }
}

/// Extracts plain text from an uploaded document.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, DocumentError> {
    match DocumentKind::from_filename(filename)? {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf(e.to_string()))
        }
        DocumentKind::Docx => docx::extract_text(bytes),
        DocumentKind::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}
