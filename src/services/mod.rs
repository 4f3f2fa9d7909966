//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - file upload to the `/api/files/upload` endpoint

pub mod upload;

pub use upload::*;
