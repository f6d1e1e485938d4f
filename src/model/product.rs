use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::catalog_arn;
use crate::core::{ARTIFACT_ID_PREFIX, PRODUCT_ID_PREFIX, PRODUCT_VIEW_ID_PREFIX, generate_id};

/// Template payload a product is created with.
///
/// `Info` is the only required member; a request body without it does not
/// deserialize, so a product can never be built without an artifact payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningArtifactParameters {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub info: JsonMap<String, JsonValue>,
    #[serde(default, rename = "Type")]
    pub artifact_type: Option<String>,
}

impl ProvisioningArtifactParameters {
    pub fn new(info: JsonMap<String, JsonValue>) -> Self {
        Self {
            name: None,
            description: None,
            info,
            artifact_type: None,
        }
    }
}

/// Input for [`crate::CatalogBackend::create_product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub owner: String,
    pub product_type: String,
    pub distributor: Option<String>,
    pub description: Option<String>,
    pub support_description: Option<String>,
    pub support_email: Option<String>,
    pub support_url: Option<String>,
    pub provisioning_artifact: ProvisioningArtifactParameters,
    pub idempotency_token: Option<String>,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        product_type: impl Into<String>,
        provisioning_artifact: ProvisioningArtifactParameters,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            product_type: product_type.into(),
            distributor: None,
            description: None,
            support_description: None,
            support_email: None,
            support_url: None,
            provisioning_artifact,
            idempotency_token: None,
        }
    }

    pub fn idempotency_token(mut self, token: impl Into<String>) -> Self {
        self.idempotency_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProvisioningArtifact {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub info: JsonMap<String, JsonValue>,
    pub artifact_type: String,
    pub created_time: DateTime<Utc>,
}

impl ProvisioningArtifact {
    fn create(params: ProvisioningArtifactParameters, created_time: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(ARTIFACT_ID_PREFIX),
            name: params.name,
            description: params.description,
            info: params.info,
            artifact_type: params.artifact_type.unwrap_or_default(),
            created_time,
        }
    }

    /// Artifacts have no deactivation lifecycle.
    pub fn active(&self) -> bool {
        true
    }
}

/// A catalog offering.
///
/// A product carries two identifiers: `view_id` (`prodview-…`) is what
/// summaries display, `product_id` (`prod-…`) is what the ARN and every
/// lookup use.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub view_id: String,
    pub product_id: String,
    pub arn: String,
    pub name: String,
    pub owner: String,
    pub product_type: String,
    pub distributor: Option<String>,
    pub description: Option<String>,
    pub support_description: Option<String>,
    pub support_email: Option<String>,
    pub support_url: Option<String>,
    pub created_time: DateTime<Utc>,
    provisioning_artifact: ProvisioningArtifact,
    portfolios: Vec<String>,
}

impl Product {
    pub(crate) fn create(input: NewProduct) -> Self {
        let product_id = generate_id(PRODUCT_ID_PREFIX);
        let arn = catalog_arn("product", &product_id);
        let created_time = Utc::now();

        Self {
            view_id: generate_id(PRODUCT_VIEW_ID_PREFIX),
            product_id,
            arn,
            name: input.name,
            owner: input.owner,
            product_type: input.product_type,
            distributor: input.distributor,
            description: input.description,
            support_description: input.support_description,
            support_email: input.support_email,
            support_url: input.support_url,
            created_time,
            provisioning_artifact: ProvisioningArtifact::create(
                input.provisioning_artifact,
                created_time,
            ),
            portfolios: Vec::new(),
        }
    }

    pub fn provisioning_artifact(&self) -> &ProvisioningArtifact {
        &self.provisioning_artifact
    }

    pub fn provisioning_artifacts(&self) -> impl Iterator<Item = &ProvisioningArtifact> {
        std::iter::once(&self.provisioning_artifact)
    }

    /// Portfolio ids this product is associated with, in association order.
    pub fn portfolios(&self) -> &[String] {
        &self.portfolios
    }

    pub fn has_default_path(&self) -> bool {
        !self.portfolios.is_empty()
    }

    pub(crate) fn link_portfolio(&mut self, portfolio_id: &str) -> bool {
        if self.portfolios.iter().any(|linked| linked == portfolio_id) {
            return false;
        }
        self.portfolios.push(portfolio_id.to_string());
        true
    }
}
