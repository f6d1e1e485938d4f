// ============================================================================
// Service Catalog mock
// ============================================================================

pub mod config;
pub mod core;
pub mod model;
pub mod storage;
pub mod web;

pub use config::AppConfig;
pub use crate::core::{CatalogError, Result, generate_id, is_generated_id};
pub use model::{
    NewPortfolio, NewProduct, Portfolio, PortfolioDetail, Product, ProductViewDetail,
    ProductViewSummary, ProvisioningArtifact, ProvisioningArtifactDetail,
    ProvisioningArtifactParameters, ProvisioningArtifactSummary,
};
pub use storage::{CatalogBackend, IdempotencyLedger, RegionRegistry, SUPPORTED_REGIONS};
pub use web::{AppState, Operation, build_router};

/// Builds the HTTP application for `config`: one backend per configured
/// region, routed through the JSON dispatch endpoint.
///
/// # Examples
///
/// ```
/// use servicecatalog_mock::{AppConfig, app};
///
/// let router = app(&AppConfig::default());
/// # let _ = router;
/// ```
pub fn app(config: &AppConfig) -> axum::Router {
    let registry = RegionRegistry::new(config.regions.iter().cloned());
    build_router(AppState::new(registry, config.default_region.as_str()))
}
