//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"File upload with progress"</h1>
            <p class="subtitle">
                "Pick one or more files and watch them upload. "
                "Each file gets its own progress bar and status."
            </p>
        </div>
    }
}
