//! Client configuration injected into the view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read the backend address from context instead of hard-coding it, so
//! the same views can point at any catalog server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default catalog backend address.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Settings shared by every page that talks to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme + host + port of the catalog API, without a trailing slash.
    pub api_base: String,
}

impl ClientConfig {
    /// Build a config for `api_base`, dropping any trailing slashes.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self { api_base: api_base.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for an API `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
