//! Report List Page
//!
//! Fetches the collection when the store is empty, keeps search and sort
//! order in the URL query, and hands the visible summaries to the
//! drag-to-reorder list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use crate::components::SortableList;
use crate::context::use_app_context;
use crate::models::ReportSummary;
use crate::store::{
    store_clear_messages, store_set_error, store_set_loading, store_set_reports, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn ListPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let query = use_query_map();

    let sort_order = Memo::new(move |_| query.read().get("sort").unwrap_or_else(|| "asc".to_string()));
    let search_query = Memo::new(move |_| query.read().get("q").unwrap_or_default());

    // Fetch when the store is cold, at most once per mount so an empty
    // server response cannot re-trigger the effect. Responses that lose a
    // race (or land after the page is gone) are dropped, not written.
    let (request_epoch, set_request_epoch) = signal(0u32);
    Effect::new(move |_| {
        if !store.reports().read().is_empty() || request_epoch.get_untracked() > 0 {
            return;
        }
        let epoch = request_epoch.get_untracked() + 1;
        set_request_epoch.set(epoch);
        store_set_loading(&store, true);
        store_set_error(&store, None);

        let api = ctx.api.clone();
        spawn_local(async move {
            let result = api.list_reports().await;
            if request_epoch.try_get_untracked() != Some(epoch) {
                return;
            }
            match result {
                Ok(reports) => {
                    web_sys::console::log_1(&format!("[ListPage] Loaded {} reports", reports.len()).into());
                    store_set_reports(&store, reports);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ListPage] Fetch failed: {}", e).into());
                    store_set_error(&store, Some("Failed to load reports.".to_string()));
                }
            }
            store_set_loading(&store, false);
        });
    });

    on_cleanup(move || {
        store_set_loading(&store, false);
        store_clear_messages(&store);
    });

    let visible = Memo::new(move |_| {
        let needle = search_query.get().to_lowercase();
        let descending = sort_order.get() == "desc";

        let mut summaries: Vec<ReportSummary> = store
            .reports()
            .read()
            .iter()
            .map(ReportSummary::from)
            .collect();
        if !needle.is_empty() {
            summaries.retain(|s| s.title.to_lowercase().contains(&needle));
        }
        summaries.sort_by(|a, b| {
            let (a, b) = (a.title.to_lowercase(), b.title.to_lowercase());
            if descending { b.cmp(&a) } else { a.cmp(&b) }
        });
        summaries
    });

    let update_query = {
        let navigate = use_navigate();
        move |q: String, sort: String| {
            let encoded = String::from(js_sys::encode_uri_component(&q));
            navigate(
                &format!("/?q={}&sort={}", encoded, sort),
                NavigateOptions { replace: true, ..Default::default() },
            );
        }
    };
    let on_search = {
        let update_query = update_query.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            update_query(input.value(), sort_order.get_untracked());
        }
    };
    let on_sort = {
        let update_query = update_query.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
            update_query(search_query.get_untracked(), select.value());
        }
    };

    let navigate = use_navigate();
    view! {
        <div>
            <div class="report-header">
                <div class="report-header__button">
                    <button
                        type="button"
                        class="btn btn--primary"
                        on:click=move |_| navigate("/create", Default::default())
                    >
                        "New Report"
                    </button>
                </div>

                <div class="report-header__filters">
                    <input
                        type="search"
                        class="filter-item"
                        placeholder="Search reports..."
                        prop:value=move || search_query.get()
                        on:input=on_search
                    />
                    <select class="filter-item" prop:value=move || sort_order.get() on:change=on_sort>
                        <option value="asc">"Title Asc"</option>
                        <option value="desc">"Title Desc"</option>
                    </select>
                </div>
            </div>

            <Show when=move || store.loading().get()>
                <div class="loader">"Loading reports..."</div>
            </Show>
            {move || store.error().get().map(|msg| view! {
                <div class="message message--error">{msg}</div>
            })}
            <Show when=move || !store.loading().get() && store.error().read().is_none()>
                <SortableList reports=Signal::derive(move || visible.get())/>
            </Show>
        </div>
    }
}
