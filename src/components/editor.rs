//! Report Content Editor
//!
//! Textarea for authoring report HTML with a live sanitized preview. The
//! raw text stays local; only sanitized markup ever leaves through
//! `on_change`, so the bound form value is always safe to render.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::sanitize::sanitize;

#[component]
pub fn Editor(
    /// Sanitized content owned by the parent form
    value: Signal<String>,
    /// Receives the sanitized markup on every edit
    on_change: Callback<String>,
    #[prop(into, optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let disabled = disabled.unwrap_or_else(|| Signal::derive(|| false));
    let (raw, set_raw) = signal(String::new());
    let (last_emitted, set_last_emitted) = signal(String::new());

    // Adopt external updates (loaded report, accepted draft) without
    // echoing our own emissions back into the textarea mid-keystroke
    Effect::new(move |_| {
        let external = value.get();
        if external != last_emitted.get_untracked() {
            set_raw.set(external);
        }
    });

    view! {
        <div class="editor">
            <textarea
                class="editor__input"
                rows=8
                placeholder="Report content (limited HTML allowed)..."
                prop:value=move || raw.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_raw.set(input.value());
                    let clean = sanitize(&input.value());
                    set_last_emitted.set(clean.clone());
                    on_change.run(clean);
                }
            ></textarea>
            <div class="editor__preview" inner_html=move || value.get()></div>
        </div>
    }
}
