//! UI Components
//!
//! Reusable Leptos components.

mod data_wrapper;
mod draft_modal;
mod editor;
mod sortable_item;
pub(crate) mod sortable_list;
mod summary_modal;

pub use data_wrapper::DataWrapper;
pub use draft_modal::DraftModal;
pub use editor::Editor;
pub use sortable_item::SortableItem;
pub use sortable_list::{provide_reorder_context, SortableList};
pub use summary_modal::SummaryModal;
