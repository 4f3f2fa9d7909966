//! File selection component.
//!
//! Uses the classic hidden-input trick: the native file input is invisible
//! and a styled button forwards its clicks to it, so the page controls the
//! widget's look. Selecting files starts one independent upload task each.

use gloo_utils::document;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::services::{read_as_payload, send_upload};
use crate::types::{UploadEntry, UploadStatus};

const FILE_INPUT_ID: &str = "file-input";

#[component]
pub fn UploadSection(set_uploads: WriteSignal<Vec<UploadEntry>>) -> impl IntoView {
    // Forward clicks from the custom button to the hidden native input.
    let on_button_click = move |_| {
        if let Some(input) = document().get_element_by_id(FILE_INPUT_ID) {
            if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
                input.click();
            }
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };
        for index in 0..files.length() {
            if let Some(file) = files.get(index) {
                start_upload(file, set_uploads);
            }
        }
        // Clear the selection so picking the same file again fires `change`.
        input.set_value("");
    };

    view! {
        <div class="upload-section">
            <input
                type="file"
                id=FILE_INPUT_ID
                multiple=true
                style="display:none"
                on:change=on_file_change
            />
            <button class="upload-button" on:click=on_button_click>
                "Upload files"
            </button>
            <div class="upload-hint">"Files are sent as they are selected."</div>
        </div>
    }
}

/// Prepend a status row for `file` and spawn its upload task.
///
/// Each task owns the row's status signal, so concurrent uploads never touch
/// the shared list after the initial insert.
fn start_upload(file: web_sys::File, set_uploads: WriteSignal<Vec<UploadEntry>>) {
    let entry = UploadEntry::new(file.name(), file.size());
    let status = entry.status;
    set_uploads.update(|uploads| uploads.insert(0, entry));

    log::info!("📤 Uploading {}", file.name());

    wasm_bindgen_futures::spawn_local(async move {
        let name = file.name();
        let result = async {
            let request = read_as_payload(file).await?;
            send_upload(&request, move |loaded, total| {
                status.update(|s| s.advance_progress(loaded, total));
            })
            .await
        }
        .await;

        match result {
            Ok(()) => {
                log::info!("✅ Finished uploading {}", name);
                status.set(UploadStatus::Finished);
            }
            Err(e) => {
                log::error!("❌ Upload of {} failed: {}", name, e);
                status.set(UploadStatus::failed());
            }
        }
    });
}
