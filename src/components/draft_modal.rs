//! Draft Generation Modal
//!
//! Collects instructions, asks the chat endpoint for a report draft, and
//! previews the sanitized result before the form adopts it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::sanitize::sanitize;
use crate::validate::validate_instructions;

#[component]
pub fn DraftModal(
    open: Signal<bool>,
    on_close: Callback<()>,
    /// Receives the sanitized draft when the user accepts it
    on_use_draft: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (instructions, set_instructions) = signal(String::new());
    let (draft, set_draft) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Closing the dialog resets it
    Effect::new(move |_| {
        if !open.get() {
            set_instructions.set(String::new());
            set_draft.set(String::new());
            set_error.set(None);
        }
    });

    let handle_generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = validate_instructions(&instructions.get()) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_loading.set(true);

        let api = ctx.api.clone();
        let prompt = instructions.get();
        spawn_local(async move {
            match api.generate_draft(&prompt).await {
                Ok(text) => {
                    set_draft.try_set(sanitize(&text));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[DraftModal] Generation failed: {}", e).into());
                    set_error.try_set(Some("Failed to generate the draft. Please try again.".to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal__header">
                        <h4>"Generate Report Draft"</h4>
                    </div>
                    <div class="modal__body">
                        <form on:submit=handle_generate.clone()>
                            <label for="draft-instructions">"Instructions"</label>
                            <textarea
                                id="draft-instructions"
                                rows=5
                                prop:value=move || instructions.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_instructions.set(input.value());
                                }
                            ></textarea>
                            <p class="help-text">"Minimum 10 characters."</p>

                            {move || error.get().map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}

                            <div class="modal__actions">
                                <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                                    {move || if loading.get() { "Generating..." } else { "Generate" }}
                                </button>
                                <Show when=move || !draft.get().is_empty()>
                                    <button
                                        type="button"
                                        class="btn btn--ghost"
                                        on:click=move |_| {
                                            on_use_draft.run(draft.get());
                                            on_close.run(());
                                        }
                                    >
                                        "Use Draft"
                                    </button>
                                </Show>
                            </div>
                        </form>

                        <Show when=move || !draft.get().is_empty()>
                            <div class="draft-preview">
                                <h5>"Draft Report"</h5>
                                <div class="draft-preview__body" inner_html=move || draft.get()></div>
                            </div>
                        </Show>
                    </div>
                    <div class="modal__footer">
                        <button type="button" class="btn btn--subtle" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
