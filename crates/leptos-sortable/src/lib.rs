//! Leptos Sortable List Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events, plus a
//! keyboard grab mode (Space to pick up, arrows to move, Escape to let go).
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Reorder state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Item currently being dragged (pointer) or grabbed (keyboard)
    pub active_id_read: ReadSignal<Option<u32>>,
    pub active_id_write: WriteSignal<Option<u32>>,
    /// Item the pointer is currently over (drop destination)
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (active_id_read, active_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        active_id_read,
        active_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Move the item carrying `source_id` to the current index of `target_id`.
///
/// Single-element move: the source is removed and reinserted at the target's
/// prior index, shifting the items in between by one slot. No-op when source
/// and target coincide or when either id is absent. The id set and length of
/// `items` never change.
pub fn move_item<T>(items: &mut Vec<T>, id_of: impl Fn(&T) -> u32, source_id: u32, target_id: u32) {
    if source_id == target_id {
        return;
    }
    let Some(from) = items.iter().position(|it| id_of(it) == source_id) else {
        return;
    };
    let Some(to) = items.iter().position(|it| id_of(it) == target_id) else {
        return;
    };
    let moved = items.remove(from);
    items.insert(to, moved);
}

/// End any drag or keyboard grab
pub fn end_drag(sort: &SortSignals) {
    sort.active_id_write.set(None);
    sort.over_id_write.set(None);
    sort.pending_id_write.set(None);
    sort.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = sort.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a drag handle
/// Records pending drag with start position
pub fn make_on_mousedown(sort: SortSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            ev.prevent_default();
            sort.pending_id_write.set(Some(item_id));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sort.active_id_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.active_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for items (drop destination tracking)
pub fn make_on_item_mouseenter(sort: SortSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = sort.active_id_read.get_untracked() {
            // Hovering yourself is not a destination
            if dragging != item_id {
                sort.over_id_write.set(Some(item_id));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.active_id_read.get_untracked().is_some() {
            sort.over_id_write.set(None);
        }
    }
}

/// Create keydown handler for a drag handle.
///
/// Space/Enter toggles grab. While grabbed, ArrowUp/ArrowDown ask the list to
/// step the item one slot via `on_step(item_id, delta)`; Escape lets go.
pub fn make_on_keydown<F>(sort: SortSignals, item_id: u32, on_step: F) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static
where
    F: Fn(u32, i32) + Clone + 'static,
{
    move |ev: web_sys::KeyboardEvent| {
        let grabbed = sort.active_id_read.get_untracked() == Some(item_id);
        match ev.key().as_str() {
            " " | "Enter" => {
                ev.prevent_default();
                if grabbed {
                    end_drag(&sort);
                } else {
                    sort.active_id_write.set(Some(item_id));
                }
            }
            "ArrowUp" if grabbed => {
                ev.prevent_default();
                on_step(item_id, -1);
            }
            "ArrowDown" if grabbed => {
                ev.prevent_default();
                on_step(item_id, 1);
            }
            "Escape" if grabbed => {
                ev.prevent_default();
                end_drag(&sort);
            }
            _ => {}
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(u32, u32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let active_id = sort.active_id_read.get_untracked();
        let over_id = sort.over_id_read.get_untracked();

        // Clear pending state first
        sort.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(target)) = (active_id, over_id) {
            end_drag(&sort);
            on_drop(dragged, target);
        } else if active_id.is_some() {
            end_drag(&sort);
        }
        // Otherwise a plain click; the click event fires naturally
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(sort);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[(u32, &str)]) -> Vec<u32> {
        items.iter().map(|(id, _)| *id).collect()
    }

    fn sample() -> Vec<(u32, &'static str)> {
        vec![(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]
    }

    #[test]
    fn test_move_down_lands_at_targets_prior_index() {
        let mut items = sample();
        // 4 sat at index 3 before the move
        move_item(&mut items, |it| it.0, 1, 4);
        assert_eq!(ids(&items), vec![2, 3, 4, 1, 5]);
        assert_eq!(items[3].0, 1);
    }

    #[test]
    fn test_move_up_lands_at_targets_prior_index() {
        let mut items = sample();
        // 2 sat at index 1 before the move
        move_item(&mut items, |it| it.0, 5, 2);
        assert_eq!(ids(&items), vec![1, 5, 2, 3, 4]);
        assert_eq!(items[1].0, 5);
    }

    #[test]
    fn test_move_preserves_id_set_and_length() {
        let mut items = sample();
        move_item(&mut items, |it| it.0, 3, 1);
        let mut sorted = ids(&items);
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_move_to_self_is_noop() {
        let mut items = sample();
        move_item(&mut items, |it| it.0, 3, 3);
        assert_eq!(ids(&items), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_missing_source_or_target_is_noop() {
        let mut items = sample();
        move_item(&mut items, |it| it.0, 99, 3);
        assert_eq!(ids(&items), vec![1, 2, 3, 4, 5]);
        move_item(&mut items, |it| it.0, 3, 99);
        assert_eq!(ids(&items), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_adjacent_swap_both_directions() {
        let mut items = sample();
        move_item(&mut items, |it| it.0, 2, 3);
        assert_eq!(ids(&items), vec![1, 3, 2, 4, 5]);
        move_item(&mut items, |it| it.0, 2, 3);
        assert_eq!(ids(&items), vec![1, 2, 3, 4, 5]);
    }
}
