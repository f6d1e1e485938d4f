/// Catalog backend tests
///
/// Exercise the region backends through the public library API.
/// Run with: cargo test --test catalog_backend_tests

use regex::Regex;
use serde_json::json;
use servicecatalog_mock::{
    CatalogBackend, CatalogError, NewPortfolio, NewProduct, PortfolioDetail,
    ProvisioningArtifactParameters, RegionRegistry,
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Barrier;

fn template() -> ProvisioningArtifactParameters {
    let mut info = serde_json::Map::new();
    info.insert(
        "LoadTemplateFromURL".to_string(),
        json!("https://s3.amazonaws.com/cf-templates-ozkq9d3hgiq2-us-east-1/product.json"),
    );
    ProvisioningArtifactParameters::new(info)
}

#[test]
fn test_identifier_shapes_and_arns() {
    let mut backend = CatalogBackend::new("us-east-1");
    let portfolio = backend
        .create_portfolio(NewPortfolio::new("Test Portfolio", "Test provider"))
        .unwrap();
    let product = backend
        .create_product(NewProduct::new(
            "Test Product",
            "Owner",
            "CLOUD_FORMATION_TEMPLATE",
            template(),
        ))
        .unwrap();

    assert!(Regex::new(r"^port-[a-z0-9]{13}$").unwrap().is_match(portfolio.id()));
    assert!(Regex::new(r"^prodview-[a-z0-9]{13}$").unwrap().is_match(&product.view_id));
    assert!(Regex::new(r"^prod-[a-z0-9]{13}$").unwrap().is_match(&product.product_id));
    assert!(
        Regex::new(r"^pa-[a-z0-9]{13}$")
            .unwrap()
            .is_match(&product.provisioning_artifact().id)
    );

    assert_eq!(
        portfolio.arn(),
        format!("arn:aws:catalog:us-east-1:012345678910:portfolio/{}", portfolio.id())
    );
    assert_eq!(
        product.arn,
        format!("arn:aws:catalog:us-east-1:012345678910:product/{}", product.product_id)
    );
}

#[test]
fn test_idempotent_portfolio_creation_keeps_original_fields() {
    let mut backend = CatalogBackend::new("us-east-1");

    let first = backend
        .create_portfolio(
            NewPortfolio::new("Original", "Provider A")
                .description("first call")
                .idempotency_token("retry-token"),
        )
        .unwrap();
    let retried = backend
        .create_portfolio(
            NewPortfolio::new("Changed", "Provider B")
                .description("second call")
                .idempotency_token("retry-token"),
        )
        .unwrap();

    let first_view = PortfolioDetail::from(&first);
    let retried_view = PortfolioDetail::from(&retried);
    assert_eq!(first_view.id, retried_view.id);
    assert_eq!(first_view.arn, retried_view.arn);
    assert_eq!(first_view.created_time, retried_view.created_time);
    assert_eq!(retried_view.display_name, "Original");
    assert_eq!(retried_view.description.as_deref(), Some("first call"));
}

#[test]
fn test_distinct_or_missing_tokens_create_distinct_portfolios() {
    let mut backend = CatalogBackend::new("us-east-1");

    let ids = [Some("a"), Some("b"), None, None, Some("")]
        .into_iter()
        .map(|token| {
            let mut input = NewPortfolio::new("Same name", "Provider");
            input.idempotency_token = token.map(ToString::to_string);
            backend.create_portfolio(input).unwrap().id().to_string()
        })
        .collect::<HashSet<_>>();

    assert_eq!(ids.len(), 5);
    assert_eq!(backend.list_portfolios().len(), 5);
}

#[test]
fn test_idempotent_product_creation() {
    let mut backend = CatalogBackend::new("us-east-1");

    let mut first = NewProduct::new("Product", "Owner", "CLOUD_FORMATION_TEMPLATE", template())
        .idempotency_token("product-token");
    first.description = Some("original".to_string());
    let created = backend.create_product(first).unwrap();

    let mut second = NewProduct::new("Other", "Someone", "MARKETPLACE", template())
        .idempotency_token("product-token");
    second.description = Some("ignored".to_string());
    let replayed = backend.create_product(second).unwrap();

    assert_eq!(created, replayed);
    assert_eq!(backend.search_products_as_admin(None).unwrap().len(), 1);
}

#[test]
fn test_list_portfolios_returns_everything_in_creation_order() {
    let mut backend = CatalogBackend::new("us-east-1");
    let created = (0..5)
        .map(|index| {
            backend
                .create_portfolio(NewPortfolio::new(format!("Portfolio {index}"), "Provider"))
                .unwrap()
        })
        .collect::<Vec<_>>();

    assert_eq!(backend.list_portfolios(), created);
}

#[test]
fn test_describe_unknown_portfolio_names_the_id() {
    let backend = CatalogBackend::new("us-east-1");
    let err = backend.describe_portfolio("port-doesnotexist").unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("port-doesnotexist"));
    assert_eq!(err.to_string(), "Portfolio port-doesnotexist not found.");
}

#[test]
fn test_association_sets_default_path() {
    let mut backend = CatalogBackend::new("us-east-1");
    let portfolio = backend
        .create_portfolio(NewPortfolio::new("Portfolio", "Provider"))
        .unwrap();
    let product = backend
        .create_product(NewProduct::new("Product", "Owner", "CLOUD_FORMATION_TEMPLATE", template()))
        .unwrap();
    assert!(!product.has_default_path());

    backend
        .associate_product_with_portfolio(&product.product_id, portfolio.id())
        .unwrap();

    let product = backend
        .describe_product_as_admin(&product.product_id)
        .unwrap();
    let portfolio = backend.describe_portfolio(portfolio.id()).unwrap();
    assert!(product.has_default_path());
    assert!(portfolio.products().contains(&product.product_id));
}

#[test]
fn test_association_with_unknown_entities_fails_cleanly() {
    let mut backend = CatalogBackend::new("us-east-1");
    let portfolio = backend
        .create_portfolio(NewPortfolio::new("Portfolio", "Provider"))
        .unwrap();

    let err = backend
        .associate_product_with_portfolio("prod-doesnotexist", portfolio.id())
        .unwrap_err();
    assert_eq!(err, CatalogError::ProductNotFound("prod-doesnotexist".to_string()));
    assert!(backend.describe_portfolio(portfolio.id()).unwrap().products().is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_with_one_token_yield_one_portfolio() {
    let registry = RegionRegistry::new(["us-east-1"]);
    let barrier = Arc::new(Barrier::new(8));

    let mut handles = vec![];
    for task_id in 0..8 {
        let backend = registry.backend("us-east-1").unwrap();
        let barrier = Arc::clone(&barrier);

        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            backend
                .lock()
                .await
                .create_portfolio(
                    NewPortfolio::new(format!("task {task_id}"), "Provider")
                        .idempotency_token("shared-token"),
                )
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().id().to_string());
    }

    assert_eq!(ids.len(), 1);
    let backend = registry.backend("us-east-1").unwrap();
    assert_eq!(backend.lock().await.list_portfolios().len(), 1);
}

#[tokio::test]
async fn test_regions_are_isolated() {
    let registry = RegionRegistry::with_supported_regions();

    let portfolio = {
        let backend = registry.backend("us-east-1").unwrap();
        let mut backend = backend.lock().await;
        backend
            .create_portfolio(NewPortfolio::new("East", "Provider").idempotency_token("t"))
            .unwrap()
    };

    let west = registry.backend("us-west-2").unwrap();
    let mut west = west.lock().await;
    assert!(west.describe_portfolio(portfolio.id()).is_err());

    let replay_elsewhere = west
        .create_portfolio(NewPortfolio::new("West", "Provider").idempotency_token("t"))
        .unwrap();
    assert_ne!(replay_elsewhere.id(), portfolio.id());
    assert_eq!(replay_elsewhere.name(), "West");
}
