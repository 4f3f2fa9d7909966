//! filedrop - browser file uploads with progress, in Rust/Leptos
//!
//! A WebAssembly frontend demonstrating file uploads with per-file progress
//! feedback. Files are base64-encoded into JSON and POSTed to a fixed
//! endpoint; each one gets a status row that goes from a live progress bar
//! to "Finished!" or "Upload failed.".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (app name)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (button + hidden file input)             │
//! │  └── UploadList (status rows, newest first)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - status rows and API body types
//! - [`error`] - upload error hierarchy
//! - [`components`] - UI components
//! - [`services`] - the upload HTTP service

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{ApiError, UploadEntry, UploadRequest, UploadStatus};

pub use error::{UploadError, UploadResult};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 filedrop - starting Leptos app");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The upload rows are the only shared state. Each row carries its own
    // status signal, so in-flight uploads never write to this list.
    let (uploads, set_uploads) = create_signal(Vec::<UploadEntry>::new());

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection set_uploads=set_uploads/>

            <Show
                when=move || !uploads.get().is_empty()
                fallback=|| view! { }
            >
                <UploadList uploads=uploads/>
            </Show>
        </div>

        <Footer/>
    }
}
