use std::sync::Arc;

use axum::http::HeaderMap;

use super::region::region_from_headers;
use crate::core::Result;
use crate::storage::{RegionRegistry, SharedBackend};

#[derive(Clone)]
pub struct AppState {
    pub registry: RegionRegistry,
    pub default_region: Arc<str>,
}

impl AppState {
    pub fn new(registry: RegionRegistry, default_region: impl Into<Arc<str>>) -> Self {
        Self {
            registry,
            default_region: default_region.into(),
        }
    }

    /// Picks the backend for the region a request addresses.
    pub fn backend_for(&self, headers: &HeaderMap) -> Result<(String, SharedBackend)> {
        let region =
            region_from_headers(headers).unwrap_or_else(|| self.default_region.to_string());
        let backend = self.registry.backend(&region)?;
        Ok((region, backend))
    }
}
