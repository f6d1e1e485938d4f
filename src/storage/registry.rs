use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::CatalogBackend;
use crate::core::{CatalogError, Result};

/// Regions the Service Catalog API is offered in.
pub const SUPPORTED_REGIONS: &[&str] = &[
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ca-central-1",
    "eu-central-1",
    "eu-north-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

/// Handle on one region's backend.
pub type SharedBackend = Arc<Mutex<CatalogBackend>>;

/// One independent [`CatalogBackend`] per region.
///
/// Built once at startup and handed to request handlers. The set of regions
/// is fixed for the registry's lifetime; nothing is shared between them.
#[derive(Debug, Clone)]
pub struct RegionRegistry {
    backends: Arc<HashMap<String, SharedBackend>>,
}

impl RegionRegistry {
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backends = regions
            .into_iter()
            .map(Into::into)
            .map(|region: String| {
                let backend = Arc::new(Mutex::new(CatalogBackend::new(region.clone())));
                (region, backend)
            })
            .collect::<HashMap<_, _>>();

        Self {
            backends: Arc::new(backends),
        }
    }

    /// Registry covering [`SUPPORTED_REGIONS`].
    pub fn with_supported_regions() -> Self {
        Self::new(SUPPORTED_REGIONS.iter().copied())
    }

    pub fn backend(&self, region: &str) -> Result<SharedBackend> {
        self.backends
            .get(region)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownRegion(region.to_string()))
    }

    pub fn contains(&self, region: &str) -> bool {
        self.backends.contains_key(region)
    }

    /// Configured regions, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions = self.backends.keys().map(String::as_str).collect::<Vec<_>>();
        regions.sort_unstable();
        regions
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::with_supported_regions()
    }
}
