use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::model::{
    NewPortfolio, NewProduct, PortfolioDetail, ProductViewDetail, ProductViewSummary,
    ProvisioningArtifactDetail, ProvisioningArtifactParameters, ProvisioningArtifactSummary,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePortfolioRequest {
    pub display_name: String,
    pub provider_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub idempotency_token: Option<String>,
}

impl From<CreatePortfolioRequest> for NewPortfolio {
    fn from(request: CreatePortfolioRequest) -> Self {
        Self {
            name: request.display_name,
            provider_name: request.provider_name,
            description: request.description,
            idempotency_token: request.idempotency_token,
        }
    }
}

/// Body of every operation that addresses one resource by `Id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdRequest {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub owner: String,
    pub product_type: String,
    #[serde(default)]
    pub distributor: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub support_description: Option<String>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub support_url: Option<String>,
    pub provisioning_artifact_parameters: ProvisioningArtifactParameters,
    #[serde(default)]
    pub idempotency_token: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            owner: request.owner,
            product_type: request.product_type,
            distributor: request.distributor,
            description: request.description,
            support_description: request.support_description,
            support_email: request.support_email,
            support_url: request.support_url,
            provisioning_artifact: request.provisioning_artifact_parameters,
            idempotency_token: request.idempotency_token,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchProductsAsAdminRequest {
    #[serde(default)]
    pub portfolio_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProvisioningArtifactRequest {
    pub product_id: String,
    pub provisioning_artifact_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateProductWithPortfolioRequest {
    pub product_id: String,
    pub portfolio_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPortfoliosForProductRequest {
    pub product_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortfolioDetailResponse {
    pub portfolio_detail: PortfolioDetail,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortfolioDetailsResponse {
    pub portfolio_details: Vec<PortfolioDetail>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProductResponse {
    pub product_view_detail: ProductViewDetail,
    pub provisioning_artifact_detail: ProvisioningArtifactDetail,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProductAsAdminResponse {
    pub product_view_detail: ProductViewDetail,
    pub provisioning_artifact_summaries: Vec<ProvisioningArtifactSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProductResponse {
    pub product_view_summary: ProductViewSummary,
    pub provisioning_artifacts: Vec<ProvisioningArtifactSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchProductsAsAdminResponse {
    pub product_view_details: Vec<ProductViewDetail>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProvisioningArtifactResponse {
    pub provisioning_artifact_detail: ProvisioningArtifactDetail,
    pub info: JsonMap<String, JsonValue>,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
