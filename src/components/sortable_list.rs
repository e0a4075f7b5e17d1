//! Sortable Report List
//!
//! Optimistic local reordering of the report summaries on display. The
//! order lives only in this component: any change to the backing
//! collection resets it wholesale, and nothing is ever persisted.

use leptos::prelude::*;
use leptos_sortable::{bind_global_mouseup, create_sort_signals, end_drag, move_item, SortSignals};

use crate::components::SortableItem;
use crate::models::ReportSummary;

/// Reorder signals shared by the list and its items, provided once at the
/// app root so the global mouse listeners outlive page navigation.
#[derive(Clone, Copy)]
pub struct ReorderContext {
    pub sort: SortSignals,
    /// Last completed pointer drop (source, target), consumed by the list
    pub last_drop: ReadSignal<Option<(u32, u32)>>,
    pub set_last_drop: WriteSignal<Option<(u32, u32)>>,
}

/// Install the reorder context and the document-level mouse listeners.
pub fn provide_reorder_context() {
    let sort = create_sort_signals();
    let (last_drop, set_last_drop) = signal(None::<(u32, u32)>);
    bind_global_mouseup(sort, move |source, target| {
        set_last_drop.set(Some((source, target)));
    });
    provide_context(ReorderContext { sort, last_drop, set_last_drop });
}

#[component]
pub fn SortableList(reports: Signal<Vec<ReportSummary>>) -> impl IntoView {
    let ctx = use_context::<ReorderContext>().expect("ReorderContext should be provided");
    let sort = ctx.sort;

    let (items, set_items) = signal(Vec::<ReportSummary>::new());

    // Reset from source: a refetch or filter change discards any in-progress
    // drag and any manual order
    Effect::new(move |_| {
        let source = reports.get();
        end_drag(&sort);
        set_items.set(source);
    });

    // Apply completed pointer drops as a single-element move
    Effect::new(move |_| {
        if let Some((source, target)) = ctx.last_drop.get() {
            ctx.set_last_drop.set(None);
            set_items.update(|items| move_item(items, |it| it.id, source, target));
        }
    });

    // Keyboard: step the grabbed item one slot up or down
    let on_step = Callback::new(move |(id, delta): (u32, i32)| {
        set_items.update(|items| {
            let Some(index) = items.iter().position(|it| it.id == id) else {
                return;
            };
            let target = index as i32 + delta;
            if target < 0 || target as usize >= items.len() {
                return;
            }
            let target_id = items[target as usize].id;
            move_item(items, |it| it.id, id, target_id);
        });
    });

    view! {
        <div class="sortable-list" role="list">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| view! { <SortableItem item=item on_step=on_step/> }
            />
            <Show when=move || items.get().is_empty()>
                <p class="empty-list">"No reports to show."</p>
            </Show>
        </div>
    }
}
