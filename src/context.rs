//! Application Context
//!
//! Shared collaborators provided via Leptos Context API, so pages receive
//! them explicitly instead of reaching for globals.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::Config;

/// App-wide collaborators provided via context
#[derive(Clone)]
pub struct AppContext {
    /// REST + chat client, built once from the environment
    pub api: ApiClient,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }
}

/// Get the app context; panics when the provider is missing
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
