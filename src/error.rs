//! Error types for the upload flow.
//!
//! A single [`UploadError`] covers every way an upload can go wrong, from
//! reading the file in the browser to the terminal HTTP response. Components
//! collapse any variant into the same user-facing "Upload failed." row state;
//! the variants exist so the console log can say what actually happened.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors produced by the upload service.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The FileReader could not read the selected file.
    #[error("Failed to read file: {0}")]
    Read(String),

    /// A browser API call failed before the request went out.
    #[error("Browser API error: {0}")]
    Browser(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The server rejected the upload with a 4xx status.
    ///
    /// `detail` carries the server's `{"error": ...}` payload when it could
    /// be parsed. It is logged to the console, never shown in the row.
    #[error("Server rejected the upload (HTTP {status})")]
    Rejected { status: u16, detail: Option<String> },

    /// The server answered with a non-2xx, non-4xx status.
    #[error("Upload failed with HTTP {0}")]
    Http(u16),

    /// The request never produced a response (connection dropped, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),
}

impl UploadError {
    /// Wrap a `JsValue` thrown by a web-sys call.
    pub(crate) fn browser(err: JsValue) -> Self {
        UploadError::Browser(format!("{:?}", err))
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_names_the_status() {
        let err = UploadError::Rejected {
            status: 400,
            detail: Some("bad data URL".into()),
        };
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_encode_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: UploadError = json_err.into();
        assert!(matches!(err, UploadError::Encode(_)));
    }
}
