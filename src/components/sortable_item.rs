//! Sortable Report Card
//!
//! One report summary in the reorder list: a drag handle (mouse and
//! keyboard) and an edit shortcut.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_sortable::{
    make_on_item_mouseenter, make_on_keydown, make_on_mousedown, make_on_mouseleave,
};

use crate::components::sortable_list::ReorderContext;
use crate::models::ReportSummary;
use crate::sanitize::truncate_title;

#[component]
pub fn SortableItem(item: ReportSummary, on_step: Callback<(u32, i32)>) -> impl IntoView {
    let ctx = use_context::<ReorderContext>().expect("ReorderContext should be provided");
    let sort = ctx.sort;
    let id = item.id;
    let navigate = use_navigate();

    let on_mousedown = make_on_mousedown(sort, id);
    let on_mouseenter = make_on_item_mouseenter(sort, id);
    let on_mouseleave = make_on_mouseleave(sort);
    let on_keydown = make_on_keydown(sort, id, move |source, delta| on_step.run((source, delta)));

    let is_active = move || sort.active_id_read.get() == Some(id);
    let is_over = move || sort.over_id_read.get() == Some(id);

    view! {
        <div
            class="report-card"
            role="listitem"
            class:dragging=is_active
            class:drop-target=is_over
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <span class="report-card__title" title=item.title.clone()>
                {truncate_title(&item.title)}
            </span>
            <div class="report-card__actions">
                <button
                    type="button"
                    class="icon-btn drag-handle"
                    aria-label="Drag handle"
                    on:mousedown=on_mousedown
                    on:keydown=on_keydown
                >
                    "⠿"
                </button>
                <button
                    type="button"
                    class="icon-btn"
                    aria-label="Edit report"
                    on:click=move |_| navigate(&format!("/edit/{}", id), Default::default())
                >
                    "Edit"
                </button>
            </div>
        </div>
    }
}
