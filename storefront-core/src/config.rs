//! Base-URL configuration for the API client

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "STOREFRONT_API_URL";

/// Local development endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Where the API client resolves its request paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
}

impl StoreConfig {
    /// Configuration pointing at an explicit base URL.
    ///
    /// A trailing slash is trimmed so path joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Configuration from `STOREFRONT_API_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
