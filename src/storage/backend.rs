use std::collections::HashMap;

use tracing::{debug, info};

use super::ledger::{IdempotencyLedger, Reservation};
use super::table::EntityTable;
use crate::core::{CatalogError, Result};
use crate::model::{NewPortfolio, NewProduct, Portfolio, Product, ProvisioningArtifact};

/// Catalog state for a single region.
///
/// Every method takes `&self`/`&mut self` and never awaits; the registry
/// wraps each backend in a mutex so a ledger check and the creation it
/// guards run as one step.
#[derive(Debug, Default)]
pub struct CatalogBackend {
    region: String,
    portfolios: EntityTable<Portfolio>,
    products: EntityTable<Product>,
    /// `view_id -> product_id`
    product_views: HashMap<String, String>,
    portfolio_tokens: IdempotencyLedger,
    product_tokens: IdempotencyLedger,
}

impl CatalogBackend {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn create_portfolio(&mut self, input: NewPortfolio) -> Result<Portfolio> {
        let token = match self
            .portfolio_tokens
            .resolve_or_reserve(input.idempotency_token.as_deref())
        {
            Reservation::Existing(id) => {
                debug!(region = %self.region, portfolio_id = %id, "idempotent portfolio replay");
                return self.describe_portfolio(&id);
            }
            Reservation::New(token) => token,
        };

        let portfolio = Portfolio::create(input);
        let id = portfolio.id().to_string();
        self.portfolios.insert(id.clone(), portfolio.clone());
        self.portfolio_tokens.record(token, id);

        info!(
            region = %self.region,
            portfolio_id = %portfolio.id(),
            name = %portfolio.name(),
            "portfolio created"
        );
        Ok(portfolio)
    }

    pub fn describe_portfolio(&self, id: &str) -> Result<Portfolio> {
        self.portfolios
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::PortfolioNotFound(id.to_string()))
    }

    pub fn list_portfolios(&self) -> Vec<Portfolio> {
        self.portfolios.scan().cloned().collect()
    }

    pub fn create_product(&mut self, input: NewProduct) -> Result<Product> {
        let token = match self
            .product_tokens
            .resolve_or_reserve(input.idempotency_token.as_deref())
        {
            Reservation::Existing(id) => {
                debug!(region = %self.region, product_id = %id, "idempotent product replay");
                return self.describe_product_as_admin(&id);
            }
            Reservation::New(token) => token,
        };

        let product = Product::create(input);
        let product_id = product.product_id.clone();
        self.product_views
            .insert(product.view_id.clone(), product_id.clone());
        self.products.insert(product_id.clone(), product.clone());
        self.product_tokens.record(token, product_id);

        info!(
            region = %self.region,
            product_id = %product.product_id,
            view_id = %product.view_id,
            artifact_id = %product.provisioning_artifact().id,
            "product created"
        );
        Ok(product)
    }

    /// Looks a product up by its `prod-` identifier.
    pub fn describe_product_as_admin(&self, product_id: &str) -> Result<Product> {
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))
    }

    /// Looks a product up by its `prodview-` identifier.
    pub fn describe_product(&self, view_id: &str) -> Result<Product> {
        self.product_views
            .get(view_id)
            .and_then(|product_id| self.products.get(product_id))
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(view_id.to_string()))
    }

    /// All products, or only those associated with `portfolio_id`.
    pub fn search_products_as_admin(&self, portfolio_id: Option<&str>) -> Result<Vec<Product>> {
        let Some(portfolio_id) = portfolio_id else {
            return Ok(self.products.scan().cloned().collect());
        };

        let portfolio = self
            .portfolios
            .get(portfolio_id)
            .ok_or_else(|| CatalogError::PortfolioNotFound(portfolio_id.to_string()))?;

        portfolio
            .products()
            .iter()
            .map(|product_id| self.describe_product_as_admin(product_id))
            .collect()
    }

    pub fn describe_provisioning_artifact(
        &self,
        product_id: &str,
        artifact_id: &str,
    ) -> Result<ProvisioningArtifact> {
        let product = self
            .products
            .get(product_id)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?;

        product
            .provisioning_artifacts()
            .find(|artifact| artifact.id == artifact_id)
            .cloned()
            .ok_or_else(|| CatalogError::ProvisioningArtifactNotFound(artifact_id.to_string()))
    }

    /// Links a product and a portfolio in both directions.
    ///
    /// Both must exist. Associating the same pair again changes nothing.
    pub fn associate_product_with_portfolio(
        &mut self,
        product_id: &str,
        portfolio_id: &str,
    ) -> Result<()> {
        if !self.products.contains(product_id) {
            return Err(CatalogError::ProductNotFound(product_id.to_string()));
        }
        let portfolio = self
            .portfolios
            .get_mut(portfolio_id)
            .ok_or_else(|| CatalogError::PortfolioNotFound(portfolio_id.to_string()))?;
        let linked = portfolio.link_product(product_id);

        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?;
        product.link_portfolio(portfolio_id);

        if linked {
            info!(
                region = %self.region,
                product_id,
                portfolio_id,
                "product associated with portfolio"
            );
        } else {
            debug!(product_id, portfolio_id, "association already present");
        }
        Ok(())
    }

    pub fn list_portfolios_for_product(&self, product_id: &str) -> Result<Vec<Portfolio>> {
        let product = self
            .products
            .get(product_id)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?;

        product
            .portfolios()
            .iter()
            .map(|portfolio_id| self.describe_portfolio(portfolio_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProvisioningArtifactParameters;
    use serde_json::json;

    fn artifact() -> ProvisioningArtifactParameters {
        let mut info = serde_json::Map::new();
        info.insert(
            "LoadTemplateFromURL".to_string(),
            json!("https://example.com/template.json"),
        );
        ProvisioningArtifactParameters::new(info)
    }

    fn new_product(name: &str) -> NewProduct {
        NewProduct::new(name, "Owner", "CLOUD_FORMATION_TEMPLATE", artifact())
    }

    #[test]
    fn create_and_describe_portfolio() {
        let mut backend = CatalogBackend::new("us-east-1");
        let created = backend
            .create_portfolio(
                NewPortfolio::new("Test Portfolio", "Test provider")
                    .description("A test portfolio"),
            )
            .unwrap();

        let described = backend.describe_portfolio(created.id()).unwrap();
        assert_eq!(described, created);
    }

    #[test]
    fn same_token_returns_original_portfolio() {
        let mut backend = CatalogBackend::new("us-east-1");
        let first = backend
            .create_portfolio(NewPortfolio::new("first", "provider").idempotency_token("tok"))
            .unwrap();
        let second = backend
            .create_portfolio(NewPortfolio::new("second", "other").idempotency_token("tok"))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.name(), "first");
        assert_eq!(backend.list_portfolios().len(), 1);
    }

    #[test]
    fn portfolio_and_product_tokens_do_not_collide() {
        let mut backend = CatalogBackend::new("us-east-1");
        let portfolio = backend
            .create_portfolio(NewPortfolio::new("p", "provider").idempotency_token("shared"))
            .unwrap();
        let product = backend
            .create_product(new_product("prod").idempotency_token("shared"))
            .unwrap();

        assert_ne!(portfolio.id(), product.product_id);
        assert_eq!(backend.list_portfolios().len(), 1);
        assert_eq!(backend.search_products_as_admin(None).unwrap().len(), 1);
    }

    #[test]
    fn unknown_ids_raise_not_found() {
        let mut backend = CatalogBackend::new("us-east-1");

        assert_eq!(
            backend.describe_portfolio("port-doesnotexist"),
            Err(CatalogError::PortfolioNotFound("port-doesnotexist".to_string()))
        );
        assert_eq!(
            backend.describe_product_as_admin("prod-doesnotexist"),
            Err(CatalogError::ProductNotFound("prod-doesnotexist".to_string()))
        );

        let portfolio = backend
            .create_portfolio(NewPortfolio::new("p", "provider"))
            .unwrap();
        assert_eq!(
            backend.associate_product_with_portfolio("prod-doesnotexist", portfolio.id()),
            Err(CatalogError::ProductNotFound("prod-doesnotexist".to_string()))
        );

        let product = backend.create_product(new_product("x")).unwrap();
        assert_eq!(
            backend.associate_product_with_portfolio(&product.product_id, "port-doesnotexist"),
            Err(CatalogError::PortfolioNotFound("port-doesnotexist".to_string()))
        );
        assert!(!backend
            .describe_product_as_admin(&product.product_id)
            .unwrap()
            .has_default_path());
    }

    #[test]
    fn association_links_both_sides_once() {
        let mut backend = CatalogBackend::new("us-east-1");
        let portfolio = backend
            .create_portfolio(NewPortfolio::new("p", "provider"))
            .unwrap();
        let product = backend.create_product(new_product("x")).unwrap();

        for _ in 0..2 {
            backend
                .associate_product_with_portfolio(&product.product_id, portfolio.id())
                .unwrap();
        }

        let product = backend
            .describe_product_as_admin(&product.product_id)
            .unwrap();
        assert!(product.has_default_path());
        assert_eq!(product.portfolios(), [portfolio.id().to_string()]);

        let portfolio = backend.describe_portfolio(portfolio.id()).unwrap();
        assert_eq!(portfolio.products(), [product.product_id.clone()]);

        let linked = backend
            .list_portfolios_for_product(&product.product_id)
            .unwrap();
        assert_eq!(linked, vec![portfolio.clone()]);

        let in_portfolio = backend
            .search_products_as_admin(Some(portfolio.id()))
            .unwrap();
        assert_eq!(in_portfolio, vec![product]);
    }

    #[test]
    fn describe_product_by_view_id_and_artifact() {
        let mut backend = CatalogBackend::new("us-east-1");
        let product = backend.create_product(new_product("x")).unwrap();

        assert_eq!(backend.describe_product(&product.view_id).unwrap(), product);
        assert_eq!(
            backend.describe_product(&product.product_id),
            Err(CatalogError::ProductNotFound(product.product_id.clone()))
        );

        let artifact_id = product.provisioning_artifact().id.clone();
        let artifact = backend
            .describe_provisioning_artifact(&product.product_id, &artifact_id)
            .unwrap();
        assert_eq!(&artifact, product.provisioning_artifact());
        assert_eq!(
            backend.describe_provisioning_artifact(&product.product_id, "pa-doesnotexist"),
            Err(CatalogError::ProvisioningArtifactNotFound(
                "pa-doesnotexist".to_string()
            ))
        );
    }
}
