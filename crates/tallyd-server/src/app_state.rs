//! Shared application state.
//!
//! The metric store is constructed here, once, and handed to the router by
//! handle; there is no ambient singleton, so tests can build a fresh state
//! per case.

use std::sync::Arc;

use tallyd_core::store::MetricStore;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: MetricStore,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: MetricStore::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &MetricStore {
        &self.inner.store
    }
}
