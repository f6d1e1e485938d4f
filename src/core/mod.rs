pub mod error;
pub mod ids;

pub use error::{CatalogError, Result};
pub use ids::{
    ARTIFACT_ID_PREFIX, PORTFOLIO_ID_PREFIX, PRODUCT_ID_PREFIX, PRODUCT_VIEW_ID_PREFIX,
    generate_id, is_generated_id,
};
