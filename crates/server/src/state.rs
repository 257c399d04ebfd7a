//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use miola_core::Catalog;

use crate::config::ServerConfig;
use crate::persist;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog sits behind
/// one async `Mutex` held across the in-memory mutation and the
/// persistence write, so mutations never interleave.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: Mutex<Catalog>,
}

impl AppState {
    /// Create a new application state around an already-loaded catalog.
    #[must_use]
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Mutex::new(catalog),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog lock.
    #[must_use]
    pub fn catalog(&self) -> &Mutex<Catalog> {
        &self.inner.catalog
    }

    /// Persist the full catalog document.
    ///
    /// Write failures are logged and swallowed: a mutation that already
    /// succeeded in memory still reports success to the caller.
    pub async fn persist(&self, catalog: &Catalog) {
        if let Err(e) = persist::save(&self.inner.config.data_file, catalog).await {
            tracing::error!(
                path = %self.inner.config.data_file.display(),
                error = %e,
                "Failed to persist catalog"
            );
        }
    }
}
