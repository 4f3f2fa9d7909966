//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Entry Types** - per-file status rows shown in the UI
//! - **API Types** - request and response bodies for the upload endpoint

use leptos::{create_rw_signal, RwSignal};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Entry Types
// =============================================================================

/// Lifecycle of a single upload.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadStatus {
    /// Request in flight; `loaded`/`total` feed the `<progress>` element.
    InProgress { loaded: f64, total: f64 },
    /// Server answered 2xx.
    Finished,
    /// Anything else. The message is what the row displays.
    Failed { message: String },
}

impl UploadStatus {
    /// The generic failure state. Server detail goes to the console, not here.
    pub fn failed() -> Self {
        UploadStatus::Failed {
            message: "Upload failed.".to_string(),
        }
    }

    /// Whether the upload has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, UploadStatus::InProgress { .. })
    }

    /// Apply a progress event. Terminal states are never rewound: a late
    /// progress event after the request completed must not bring the
    /// progress bar back.
    pub fn advance_progress(&mut self, loaded: f64, total: f64) {
        if !self.is_terminal() {
            *self = UploadStatus::InProgress { loaded, total };
        }
    }

    /// CSS class for the row's status element.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::InProgress { .. } => "uploading",
            UploadStatus::Finished => "finished",
            UploadStatus::Failed { .. } => "failed",
        }
    }
}

static NEXT_ENTRY_ID: AtomicUsize = AtomicUsize::new(0);

/// Hand out render keys for upload rows.
pub(crate) fn next_entry_id() -> usize {
    NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed)
}

/// One status row in the upload list.
///
/// Created when a file is selected and kept until navigation. The name and
/// timestamp render once; only the status signal changes afterwards, so the
/// row re-renders without the list being touched.
#[derive(Clone, PartialEq)]
pub struct UploadEntry {
    /// Stable render key.
    pub id: usize,
    /// File name as reported by the file input.
    pub file_name: String,
    /// Local time the upload started.
    pub started_at: String,
    /// Live status, updated by the upload task.
    pub status: RwSignal<UploadStatus>,
}

impl UploadEntry {
    /// Create a fresh in-progress entry for a file of `total` bytes.
    pub fn new(file_name: String, total: f64) -> Self {
        UploadEntry {
            id: next_entry_id(),
            file_name,
            started_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            status: create_rw_signal(UploadStatus::InProgress { loaded: 0.0, total }),
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body POSTed to the upload endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Original file name.
    pub name: String,
    /// File contents as a `data:*/*;base64,` data URL.
    pub contents: String,
}

/// Error payload carried by 4xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_monotonic() {
        let a = next_entry_id();
        let b = next_entry_id();
        assert!(b > a);
    }

    #[test]
    fn test_status_terminality() {
        assert!(!UploadStatus::InProgress {
            loaded: 0.0,
            total: 10.0
        }
        .is_terminal());
        assert!(UploadStatus::Finished.is_terminal());
        assert!(UploadStatus::failed().is_terminal());
    }

    #[test]
    fn test_status_css_classes() {
        assert_eq!(
            UploadStatus::InProgress {
                loaded: 1.0,
                total: 2.0
            }
            .css_class(),
            "uploading"
        );
        assert_eq!(UploadStatus::Finished.css_class(), "finished");
        assert_eq!(UploadStatus::failed().css_class(), "failed");
    }

    #[test]
    fn test_progress_advances_while_in_flight() {
        let mut status = UploadStatus::InProgress {
            loaded: 0.0,
            total: 100.0,
        };
        status.advance_progress(40.0, 100.0);
        assert_eq!(
            status,
            UploadStatus::InProgress {
                loaded: 40.0,
                total: 100.0
            }
        );
    }

    #[test]
    fn test_progress_never_rewinds_a_terminal_row() {
        let mut status = UploadStatus::Finished;
        status.advance_progress(40.0, 100.0);
        assert_eq!(status, UploadStatus::Finished);

        let mut status = UploadStatus::failed();
        status.advance_progress(40.0, 100.0);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_failed_message_is_generic() {
        match UploadStatus::failed() {
            UploadStatus::Failed { message } => assert_eq!(message, "Upload failed."),
            _ => panic!("expected Failed"),
        }
    }

    #[test]
    fn test_request_serializes_to_expected_fields() {
        let request = UploadRequest {
            name: "notes.txt".into(),
            contents: "data:text/plain;base64,aGVsbG8=".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["name"], "notes.txt");
        assert_eq!(value["contents"], "data:text/plain;base64,aGVsbG8=");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_api_error_deserializes() {
        let json = r#"{"error": "Expected `contents` field to be a data URL"}"#;
        let parsed: ApiError = serde_json::from_str(json).unwrap();
        assert!(parsed.error.contains("data URL"));
    }
}
