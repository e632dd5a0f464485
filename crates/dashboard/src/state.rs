//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::cache::ViewCache;
use crate::config::DashboardConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// remote API client, the view cache, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    client: ApiClient,
    cache: ViewCache,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let client = ApiClient::new(&config.api_base_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                client,
                cache: ViewCache::new(),
            }),
        }
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Get a reference to the remote API client.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// Get a reference to the view cache.
    #[must_use]
    pub fn cache(&self) -> &ViewCache {
        &self.inner.cache
    }
}
