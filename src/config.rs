//! Application configuration.
//!
//! Centralized configuration for the filedrop frontend. The endpoint is
//! hardcoded for the demo; a real deployment would load it from the page
//! or a config file.

/// Upload endpoint consumed by the app.
///
/// Expects a JSON body `{"name": string, "contents": base64 data URL}`.
pub const UPLOAD_ENDPOINT: &str = "/api/files/upload";

/// Application name, shown in the header and the page title.
pub const APP_NAME: &str = "filedrop";
