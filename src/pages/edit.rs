//! Edit Report Page
//!
//! Loads the report from the store (or the API when the store is cold),
//! gates editing on the Admin role, and offers a chat-generated summary of
//! the current content.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use wasm_bindgen::JsCast;

use crate::api::ApiError;
use crate::components::{DataWrapper, Editor, SummaryModal};
use crate::context::use_app_context;
use crate::models::{ReportDraft, Role};
use crate::sanitize::sanitize;
use crate::store::{
    store_clear_messages, store_flash_success, store_set_error, store_set_loading,
    store_update_report, use_app_store, AppStateStoreFields,
};
use crate::validate::{validate_draft, DraftErrors};

/// Delay before leaving the page after a successful save
const LEAVE_AFTER_SAVE_MS: u32 = 2_500;

fn fetch_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { status: 404, .. } => "Report not found.".to_string(),
        ApiError::Decode(_) => "Report data is incomplete or malformed.".to_string(),
        _ => "Failed to fetch the report. Please try again.".to_string(),
    }
}

fn history_back() {
    if let Some(win) = web_sys::window() {
        if let Ok(history) = win.history() {
            let _ = history.back();
        }
    }
}

#[component]
pub fn EditPage() -> impl IntoView {
    let store = use_app_store();
    // Copyable handle; three separate closures below need the client
    let api = StoredValue::new(use_app_context().api);
    let params = use_params_map();

    let report_id = Memo::new(move |_| {
        params.read().get("id").and_then(|raw| raw.parse::<u32>().ok())
    });

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (loaded, set_loaded) = signal(None::<ReportDraft>);
    let (field_errors, set_field_errors) = signal(DraftErrors::default());
    let (summary_open, set_summary_open) = signal(false);
    let (summary, set_summary) = signal(None::<String>);

    on_cleanup(move || store_clear_messages(&store));

    let adopt = move |draft: ReportDraft| {
        set_title.set(draft.title.clone());
        set_content.set(draft.content.clone());
        set_loaded.set(Some(draft));
    };

    // Serve from the store when it is warm, otherwise fetch by id. A
    // missing id surfaces as not-found and leaves the form empty.
    Effect::new(move |_| {
        let Some(id) = report_id.get() else {
            store_set_error(&store, Some("Report not found.".to_string()));
            return;
        };

        let warm = !store.reports().read().is_empty();
        if warm {
            let found = store.reports().read().iter().find(|r| r.id == id).map(|r| ReportDraft {
                title: r.title.clone(),
                content: r.content.clone(),
            });
            match found {
                Some(draft) => adopt(draft),
                None => store_set_error(&store, Some("Report not found.".to_string())),
            }
            return;
        }

        store_set_loading(&store, true);
        store_set_error(&store, None);
        let api = api.get_value();
        spawn_local(async move {
            match api.get_report(id).await {
                Ok(report) => {
                    // The page may have been left while the request was in
                    // flight; its signals are gone then
                    if title.try_get_untracked().is_some() {
                        adopt(ReportDraft { title: report.title, content: report.content });
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[EditPage] Fetch failed: {}", e).into());
                    store_set_error(&store, Some(fetch_error_message(&e)));
                }
            }
            store_set_loading(&store, false);
        });
    });

    let is_admin = Memo::new(move |_| store.role().get() == Role::Admin);
    let is_edited = Memo::new(move |_| {
        loaded.read().as_ref().is_some_and(|original| {
            original.title != title.get().trim() || original.content != content.get().trim()
        })
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = report_id.get_untracked() else {
            return;
        };
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

        let api = api.get_value();
        spawn_local(async move {
            match api.update_report(id, &draft).await {
                Ok(()) => {
                    store_update_report(&store, id, &draft);
                    store_flash_success(&store, "Success: Report updated.");
                    store_set_loading(&store, false);
                    gloo_timers::future::TimeoutFuture::new(LEAVE_AFTER_SAVE_MS).await;
                    history_back();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[EditPage] Update failed: {}", e).into());
                    store_set_error(&store, Some("Failed to update the report. Please try again.".to_string()));
                    store_set_loading(&store, false);
                }
            }
        });
    };

    let handle_summarize = move |_| {
        set_summary.set(None);
        set_summary_open.set(true);
        store_set_loading(&store, true);

        let api = api.get_value();
        let body = content.get_untracked();
        spawn_local(async move {
            match api.summarize(&body).await {
                Ok(text) => {
                    set_summary.try_set(Some(sanitize(&text)));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[EditPage] Summarize failed: {}", e).into());
                    set_summary_open.try_set(false);
                    store_set_error(&store, Some("Failed to generate the summary. Please try again.".to_string()));
                }
            }
            store_set_loading(&store, false);
        });
    };

    view! {
        <DataWrapper
            loading=Signal::derive(move || store.loading().get())
            error=Signal::derive(move || store.error().get())
            success=Signal::derive(move || store.success().get())
        >
            <div class="report-form-container">
                <h4>"Edit Report"</h4>
                <p class="form-hint">"Modify the report title and content below:"</p>

                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="report-title">"Report Title"</label>
                        <input
                            id="report-title"
                            type="text"
                            prop:value=move || title.get()
                            prop:disabled=move || !is_admin.get()
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
                            disabled=Signal::derive(move || !is_admin.get())
                        />
                        {move || field_errors.get().content.map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}
                    </div>

                    <div class="form-group">
                        <button
                            type="button"
                            class="btn btn--ghost"
                            disabled=move || {
                                store.loading().get() || content.read().is_empty() || !is_admin.get()
                            }
                            on:click=handle_summarize
                        >
                            "Summarize Report"
                        </button>
                    </div>

                    <div class="form-group form-group--actions">
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || store.loading().get() || !is_admin.get() || !is_edited.get()
                        >
                            {move || if store.loading().get() { "Saving..." } else { "Save Changes" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn--subtle"
                            disabled=move || store.loading().get()
                            on:click=move |_| history_back()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>

                <SummaryModal
                    open=Signal::derive(move || summary_open.get())
                    summary=Signal::derive(move || summary.get())
                    on_close=Callback::new(move |()| set_summary_open.set(false))
                />
            </div>
        </DataWrapper>
    }
}
