//! UI Components for the filedrop application.
//!
//! # Layout Components
//! - [`Header`] - top bar with the app name
//! - [`Hero`] - main title and description
//! - [`Footer`] - page footer
//!
//! # Feature Components
//! - [`UploadSection`] - custom upload button wired to a hidden file input
//! - [`UploadList`] - per-file status rows with live progress

mod footer;
mod header;
mod hero;
mod upload;
mod uploads;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use upload::*;
pub use uploads::*;
