//! Response shapes returned to API clients.
//!
//! Field names follow the Service Catalog JSON contract. Optional members are
//! omitted rather than sent as `null`.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::{Portfolio, Product, ProvisioningArtifact};

/// Status reported for every product view.
pub const PRODUCT_STATUS: &str = "AVAILABLE";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortfolioDetail {
    pub id: String,
    #[serde(rename = "ARN")]
    pub arn: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub provider_name: String,
    #[serde(serialize_with = "epoch_seconds")]
    pub created_time: DateTime<Utc>,
}

impl From<&Portfolio> for PortfolioDetail {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            id: portfolio.id().to_string(),
            arn: portfolio.arn().to_string(),
            display_name: portfolio.name().to_string(),
            description: portfolio.description().map(ToString::to_string),
            provider_name: portfolio.provider_name().to_string(),
            created_time: portfolio.created_time(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductViewSummary {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "Type")]
    pub product_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributor: Option<String>,
    pub has_default_path: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
}

impl From<&Product> for ProductViewSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.view_id.clone(),
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            owner: product.owner.clone(),
            short_description: product.description.clone(),
            product_type: product.product_type.clone(),
            distributor: product.distributor.clone(),
            has_default_path: product.has_default_path(),
            support_email: product.support_email.clone(),
            support_description: product.support_description.clone(),
            support_url: product.support_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductViewDetail {
    pub product_view_summary: ProductViewSummary,
    pub status: &'static str,
    #[serde(rename = "ProductARN")]
    pub product_arn: String,
    #[serde(serialize_with = "epoch_seconds")]
    pub created_time: DateTime<Utc>,
}

impl From<&Product> for ProductViewDetail {
    fn from(product: &Product) -> Self {
        Self {
            product_view_summary: ProductViewSummary::from(product),
            status: PRODUCT_STATUS,
            product_arn: product.arn.clone(),
            created_time: product.created_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningArtifactDetail {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Type")]
    pub artifact_type: String,
    #[serde(serialize_with = "epoch_seconds")]
    pub created_time: DateTime<Utc>,
    pub active: bool,
}

impl From<&ProvisioningArtifact> for ProvisioningArtifactDetail {
    fn from(artifact: &ProvisioningArtifact) -> Self {
        Self {
            id: artifact.id.clone(),
            name: artifact.name.clone(),
            description: artifact.description.clone(),
            artifact_type: artifact.artifact_type.clone(),
            created_time: artifact.created_time,
            active: artifact.active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningArtifactSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(serialize_with = "epoch_seconds")]
    pub created_time: DateTime<Utc>,
}

impl From<&ProvisioningArtifact> for ProvisioningArtifactSummary {
    fn from(artifact: &ProvisioningArtifact) -> Self {
        Self {
            id: artifact.id.clone(),
            name: artifact.name.clone(),
            description: artifact.description.clone(),
            created_time: artifact.created_time,
        }
    }
}

// The JSON protocol encodes timestamps as fractional epoch seconds.
fn epoch_seconds<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(time.timestamp_millis() as f64 / 1000.0)
}
