//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"A file upload demo, written in " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
