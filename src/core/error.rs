use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Portfolio {0} not found.")]
    PortfolioNotFound(String),

    #[error("Product {0} not found.")]
    ProductNotFound(String),

    #[error("Provisioning artifact {0} not found.")]
    ProvisioningArtifactNotFound(String),

    #[error("Region '{0}' is not served by this endpoint")]
    UnknownRegion(String),

    #[error("{0}")]
    InvalidParameters(String),

    #[error("Operation '{0}' is not supported")]
    UnknownOperation(String),
}

impl CatalogError {
    /// Error code reported in the `__type` field of an AWS JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PortfolioNotFound(_)
            | Self::ProductNotFound(_)
            | Self::ProvisioningArtifactNotFound(_) => "ResourceNotFoundException",
            Self::UnknownRegion(_) | Self::InvalidParameters(_) => "InvalidParametersException",
            Self::UnknownOperation(_) => "UnknownOperationException",
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == "ResourceNotFoundException"
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
