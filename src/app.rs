//! Report Desk Frontend App
//!
//! Router shell; provides the global store and the app context to every
//! page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::provide_reorder_context;
use crate::config::Config;
use crate::context::AppContext;
use crate::pages::{CreatePage, EditPage, ListPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::from_env();

    // Provide store and collaborators to all pages
    provide_context(Store::new(AppState::default()));
    provide_context(AppContext::new(&config));
    provide_reorder_context();

    view! {
        <div class="page-wrapper">
            <Router>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=ListPage/>
                    <Route path=path!("/create") view=CreatePage/>
                    <Route path=path!("/edit/:id") view=EditPage/>
                </Routes>
            </Router>
        </div>
    }
}
