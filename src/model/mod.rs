pub mod portfolio;
pub mod product;
pub mod views;

pub use portfolio::{NewPortfolio, Portfolio};
pub use product::{NewProduct, Product, ProvisioningArtifact, ProvisioningArtifactParameters};
pub use views::{
    PortfolioDetail, ProductViewDetail, ProductViewSummary, ProvisioningArtifactDetail,
    ProvisioningArtifactSummary,
};

/// Account every emulated resource belongs to.
pub const DEFAULT_ACCOUNT_ID: &str = "012345678910";

/// Region baked into every catalog ARN, whichever backend minted it.
pub const ARN_REGION: &str = "us-east-1";

pub(crate) fn catalog_arn(resource: &str, id: &str) -> String {
    format!("arn:aws:catalog:{ARN_REGION}:{DEFAULT_ACCOUNT_ID}:{resource}/{id}")
}
