//! Pages
//!
//! One controller per route; all of them work through the store and the
//! app context rather than ambient globals.

mod create;
mod edit;
mod list;

pub use create::CreatePage;
pub use edit::EditPage;
pub use list::ListPage;
