//! Data Wrapper
//!
//! Shared chrome around page content: loading overlay plus error and
//! success messages from the store flags.

use leptos::prelude::*;

#[component]
pub fn DataWrapper(
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    success: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loader-wrapper">
                <div class="loader">"Loading..."</div>
            </div>
        </Show>

        {move || error.get().map(|msg| view! {
            <div class="message message--error">{msg}</div>
        })}
        {move || success.get().map(|msg| view! {
            <div class="message message--success">{msg}</div>
        })}

        {children()}
    }
}
