use chrono::{DateTime, Utc};

use super::catalog_arn;
use crate::core::{PORTFOLIO_ID_PREFIX, generate_id};

/// Input for [`crate::CatalogBackend::create_portfolio`].
#[derive(Debug, Clone, Default)]
pub struct NewPortfolio {
    pub name: String,
    pub provider_name: String,
    pub description: Option<String>,
    pub idempotency_token: Option<String>,
}

impl NewPortfolio {
    pub fn new(name: impl Into<String>, provider_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider_name: provider_name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn idempotency_token(mut self, token: impl Into<String>) -> Self {
        self.idempotency_token = Some(token.into());
        self
    }
}

/// A named grouping of products.
///
/// `id`, `arn` and `created_time` are fixed at creation. The product list is
/// a back-reference maintained by the backend's association operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    id: String,
    arn: String,
    name: String,
    provider_name: String,
    description: Option<String>,
    created_time: DateTime<Utc>,
    products: Vec<String>,
}

impl Portfolio {
    pub(crate) fn create(input: NewPortfolio) -> Self {
        let id = generate_id(PORTFOLIO_ID_PREFIX);
        let arn = catalog_arn("portfolio", &id);

        Self {
            id,
            arn,
            name: input.name,
            provider_name: input.provider_name,
            description: input.description,
            created_time: Utc::now(),
            products: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arn(&self) -> &str {
        &self.arn
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    /// Product ids associated with this portfolio, in association order.
    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// Returns `false` when the product was already linked.
    pub(crate) fn link_product(&mut self, product_id: &str) -> bool {
        if self.products.iter().any(|linked| linked == product_id) {
            return false;
        }
        self.products.push(product_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_generated_id;

    #[test]
    fn create_mints_id_and_derived_arn() {
        let portfolio = Portfolio::create(
            NewPortfolio::new("Test Portfolio", "Test provider").description("A test portfolio"),
        );

        assert!(is_generated_id("port", portfolio.id()));
        assert_eq!(
            portfolio.arn(),
            format!(
                "arn:aws:catalog:us-east-1:012345678910:portfolio/{}",
                portfolio.id()
            )
        );
        assert_eq!(portfolio.description(), Some("A test portfolio"));
        assert!(portfolio.products().is_empty());
    }

    #[test]
    fn link_product_ignores_duplicates() {
        let mut portfolio = Portfolio::create(NewPortfolio::new("p", "provider"));

        assert!(portfolio.link_product("prod-aaaaaaaaaaaaa"));
        assert!(!portfolio.link_product("prod-aaaaaaaaaaaaa"));
        assert_eq!(portfolio.products(), ["prod-aaaaaaaaaaaaa".to_string()]);
    }
}
