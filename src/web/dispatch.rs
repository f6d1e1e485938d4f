use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::{Value as JsonValue, json};
use tracing::debug;

use super::dto::{
    AssociateProductWithPortfolioRequest, CreatePortfolioRequest, CreateProductRequest,
    CreateProductResponse, DescribeProductAsAdminResponse, DescribeProductResponse,
    DescribeProvisioningArtifactRequest, DescribeProvisioningArtifactResponse, IdRequest,
    ListPortfoliosForProductRequest, PortfolioDetailResponse, PortfolioDetailsResponse,
    SearchProductsAsAdminRequest, SearchProductsAsAdminResponse,
};
use super::Result;
use crate::core::CatalogError;
use crate::model::views::PRODUCT_STATUS;
use crate::model::{
    PortfolioDetail, Product, ProductViewDetail, ProductViewSummary, ProvisioningArtifactDetail,
    ProvisioningArtifactSummary,
};
use crate::storage::CatalogBackend;

/// API operations understood by the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreatePortfolio,
    DescribePortfolio,
    ListPortfolios,
    CreateProduct,
    DescribeProduct,
    DescribeProductAsAdmin,
    SearchProductsAsAdmin,
    DescribeProvisioningArtifact,
    AssociateProductWithPortfolio,
    ListPortfoliosForProduct,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::CreatePortfolio,
        Operation::DescribePortfolio,
        Operation::ListPortfolios,
        Operation::CreateProduct,
        Operation::DescribeProduct,
        Operation::DescribeProductAsAdmin,
        Operation::SearchProductsAsAdmin,
        Operation::DescribeProvisioningArtifact,
        Operation::AssociateProductWithPortfolio,
        Operation::ListPortfoliosForProduct,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::CreatePortfolio => "CreatePortfolio",
            Operation::DescribePortfolio => "DescribePortfolio",
            Operation::ListPortfolios => "ListPortfolios",
            Operation::CreateProduct => "CreateProduct",
            Operation::DescribeProduct => "DescribeProduct",
            Operation::DescribeProductAsAdmin => "DescribeProductAsAdmin",
            Operation::SearchProductsAsAdmin => "SearchProductsAsAdmin",
            Operation::DescribeProvisioningArtifact => "DescribeProvisioningArtifact",
            Operation::AssociateProductWithPortfolio => "AssociateProductWithPortfolio",
            Operation::ListPortfoliosForProduct => "ListPortfoliosForProduct",
        }
    }

    /// Parses an `X-Amz-Target` value such as
    /// `AWS242ServiceCatalogService.CreatePortfolio`.
    pub fn from_target(target: &str) -> std::result::Result<Self, CatalogError> {
        let name = target
            .rsplit_once('.')
            .map_or(target, |(_, operation)| operation);
        name.parse()
    }

    fn mutates(self) -> bool {
        matches!(
            self,
            Operation::CreatePortfolio
                | Operation::CreateProduct
                | Operation::AssociateProductWithPortfolio
        )
    }
}

impl FromStr for Operation {
    type Err = CatalogError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| CatalogError::UnknownOperation(name.to_string()))
    }
}

/// Runs `operation` against one region's backend and returns the JSON
/// response body.
pub fn execute(backend: &mut CatalogBackend, operation: Operation, body: &[u8]) -> Result<JsonValue> {
    debug!(
        region = %backend.region(),
        operation = operation.name(),
        mutating = operation.mutates(),
        "executing catalog operation"
    );

    let response = match operation {
        Operation::CreatePortfolio => {
            let request = parse_body::<CreatePortfolioRequest>(body)?;
            let portfolio = backend.create_portfolio(request.into())?;
            serde_json::to_value(PortfolioDetailResponse {
                portfolio_detail: PortfolioDetail::from(&portfolio),
            })?
        }
        Operation::DescribePortfolio => {
            let request = parse_body::<IdRequest>(body)?;
            let portfolio = backend.describe_portfolio(&request.id)?;
            serde_json::to_value(PortfolioDetailResponse {
                portfolio_detail: PortfolioDetail::from(&portfolio),
            })?
        }
        Operation::ListPortfolios => serde_json::to_value(PortfolioDetailsResponse {
            portfolio_details: backend
                .list_portfolios()
                .iter()
                .map(PortfolioDetail::from)
                .collect(),
        })?,
        Operation::CreateProduct => {
            let request = parse_body::<CreateProductRequest>(body)?;
            let product = backend.create_product(request.into())?;
            serde_json::to_value(CreateProductResponse {
                product_view_detail: ProductViewDetail::from(&product),
                provisioning_artifact_detail: ProvisioningArtifactDetail::from(
                    product.provisioning_artifact(),
                ),
            })?
        }
        Operation::DescribeProduct => {
            let request = parse_body::<IdRequest>(body)?;
            let product = backend.describe_product(&request.id)?;
            serde_json::to_value(DescribeProductResponse {
                product_view_summary: ProductViewSummary::from(&product),
                provisioning_artifacts: artifact_summaries(&product),
            })?
        }
        Operation::DescribeProductAsAdmin => {
            let request = parse_body::<IdRequest>(body)?;
            let product = backend.describe_product_as_admin(&request.id)?;
            serde_json::to_value(DescribeProductAsAdminResponse {
                product_view_detail: ProductViewDetail::from(&product),
                provisioning_artifact_summaries: artifact_summaries(&product),
            })?
        }
        Operation::SearchProductsAsAdmin => {
            let request = parse_optional_body::<SearchProductsAsAdminRequest>(body)?;
            let products = backend.search_products_as_admin(request.portfolio_id.as_deref())?;
            serde_json::to_value(SearchProductsAsAdminResponse {
                product_view_details: products.iter().map(ProductViewDetail::from).collect(),
            })?
        }
        Operation::DescribeProvisioningArtifact => {
            let request = parse_body::<DescribeProvisioningArtifactRequest>(body)?;
            let artifact = backend.describe_provisioning_artifact(
                &request.product_id,
                &request.provisioning_artifact_id,
            )?;
            serde_json::to_value(DescribeProvisioningArtifactResponse {
                provisioning_artifact_detail: ProvisioningArtifactDetail::from(&artifact),
                info: artifact.info,
                status: PRODUCT_STATUS,
            })?
        }
        Operation::AssociateProductWithPortfolio => {
            let request = parse_body::<AssociateProductWithPortfolioRequest>(body)?;
            backend.associate_product_with_portfolio(&request.product_id, &request.portfolio_id)?;
            json!({})
        }
        Operation::ListPortfoliosForProduct => {
            let request = parse_body::<ListPortfoliosForProductRequest>(body)?;
            let portfolios = backend.list_portfolios_for_product(&request.product_id)?;
            serde_json::to_value(PortfolioDetailsResponse {
                portfolio_details: portfolios.iter().map(PortfolioDetail::from).collect(),
            })?
        }
    };

    Ok(response)
}

fn artifact_summaries(product: &Product) -> Vec<ProvisioningArtifactSummary> {
    product
        .provisioning_artifacts()
        .map(ProvisioningArtifactSummary::from)
        .collect()
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };

    serde_json::from_slice(body).map_err(|err| {
        CatalogError::InvalidParameters(format!("Invalid request parameters: {err}")).into()
    })
}

fn parse_optional_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    parse_body(body)
}
