//! Upload status list.
//!
//! One row per selected file, newest first. A row shows a native
//! `<progress>` element while the request is in flight and swaps it for a
//! terminal message once the upload finishes or fails.

use leptos::*;

use crate::types::{UploadEntry, UploadStatus};

#[component]
pub fn UploadList(uploads: ReadSignal<Vec<UploadEntry>>) -> impl IntoView {
    view! {
        <ul class="uploads">
            <For
                each=move || uploads.get()
                key=|entry| entry.id
                children=move |entry| view! { <UploadRow entry/> }
            />
        </ul>
    }
}

#[component]
fn UploadRow(entry: UploadEntry) -> impl IntoView {
    let status = entry.status;

    view! {
        <li class="upload-row">
            <div class="upload-main">
                <span class="file-name">{entry.file_name.clone()}</span>
                {move || {
                    let current = status.get();
                    let class = format!("message {}", current.css_class());
                    match current {
                        UploadStatus::InProgress { loaded, total } => view! {
                            <progress value=loaded max=total></progress>
                        }
                        .into_view(),
                        UploadStatus::Finished => view! {
                            <span class=class>"Finished!"</span>
                        }
                        .into_view(),
                        UploadStatus::Failed { message } => view! {
                            <span class=class>{message}</span>
                        }
                        .into_view(),
                    }
                }}
            </div>
            <div class="upload-meta">
                <span class="timestamp">{entry.started_at.clone()}</span>
            </div>
        </li>
    }
}
