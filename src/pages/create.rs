//! Create Report Page
//!
//! Validates locally, POSTs the draft, appends it to the store on success,
//! and flashes a confirmation. The draft modal can prefill the content.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::components::{DataWrapper, DraftModal, Editor};
use crate::context::use_app_context;
use crate::models::ReportDraft;
use crate::store::{
    store_add_report, store_clear_messages, store_flash_success, store_set_error,
    store_set_loading, use_app_store, AppStateStoreFields,
};
use crate::validate::{validate_draft, DraftErrors};

#[component]
pub fn CreatePage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (field_errors, set_field_errors) = signal(DraftErrors::default());
    let (draft_modal_open, set_draft_modal_open) = signal(false);

    on_cleanup(move || store_clear_messages(&store));

    // Client-side validation runs first; a rejected form never reaches
    // the network
    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let errors = validate_draft(&title.get(), &content.get());
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(DraftErrors::default());

        let draft = ReportDraft {
            title: title.get().trim().to_string(),
            content: content.get(),
        };
        store_set_loading(&store, true);
        store_set_error(&store, None);

        let api = ctx.api.clone();
        spawn_local(async move {
            match api.create_report(&draft).await {
                Ok(()) => {
                    store_add_report(&store, &draft);
                    set_title.try_set(String::new());
                    set_content.try_set(String::new());
                    store_flash_success(&store, "Success: New report created.");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CreatePage] Create failed: {}", e).into());
                    store_set_error(&store, Some("Failed to create the report. Please try again.".to_string()));
                }
            }
            store_set_loading(&store, false);
        });
    };

    let open_draft_modal = move |_| {
        // Stale messages would sit behind the dialog otherwise
        store_clear_messages(&store);
        set_draft_modal_open.set(true);
    };

    view! {
        <DataWrapper
            loading=Signal::derive(move || store.loading().get())
            error=Signal::derive(move || store.error().get())
            success=Signal::derive(move || store.success().get())
        >
            <div class="report-form-container">
                <h4>"Create New Report"</h4>
                <p class="form-hint">"Fill in the report title and content below:"</p>

                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="report-title">"Report Title"</label>
                        <input
                            id="report-title"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                        {move || field_errors.get().title.map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}
                    </div>

                    <div class="form-group">
                        <label>"Report Content"</label>
                        <Editor
                            value=Signal::derive(move || content.get())
                            on_change=Callback::new(move |clean| set_content.set(clean))
                        />
                        {move || field_errors.get().content.map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}
                    </div>

                    <div class="form-group">
                        <button type="button" class="btn btn--ghost" on:click=open_draft_modal>
                            "Generate Draft"
                        </button>
                    </div>

                    <div class="form-group form-group--actions">
                        <button type="submit" class="btn btn--primary" disabled=move || store.loading().get()>
                            {move || if store.loading().get() { "Saving..." } else { "Save Report" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn--subtle"
                            disabled=move || store.loading().get()
                            on:click=move |_| navigate("/", Default::default())
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>

                <DraftModal
                    open=Signal::derive(move || draft_modal_open.get())
                    on_close=Callback::new(move |()| set_draft_modal_open.set(false))
                    on_use_draft=Callback::new(move |draft: String| {
                        set_content.set(draft);
                        set_draft_modal_open.set(false);
                    })
                />
            </div>
        </DataWrapper>
    }
}
