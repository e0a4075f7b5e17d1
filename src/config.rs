//! Build-Time Configuration
//!
//! The API base URL and the chat credential are baked in from the build
//! environment; nothing else is configurable or persisted.

/// Environment-derived settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the reports API, no trailing slash
    pub api_url: String,
    /// Bearer credential for the chat-completion endpoint
    pub openai_token: Option<String>,
}

impl Config {
    /// Read configuration captured at compile time.
    pub fn from_env() -> Self {
        let api_url = option_env!("REPORTS_API_URL")
            .unwrap_or("/api")
            .trim_end_matches('/')
            .to_string();
        let openai_token = option_env!("OPENAI_API_KEY").map(|t| t.to_string());
        Self { api_url, openai_token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_has_base_url() {
        let config = Config::from_env();
        assert!(!config.api_url.is_empty());
        assert!(!config.api_url.ends_with('/'));
    }
}
