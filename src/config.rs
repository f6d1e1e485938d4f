use std::net::SocketAddr;

use anyhow::{Context, Result, bail};

use crate::storage::SUPPORTED_REGIONS;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Emulator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP endpoint listens on.
    pub bind_addr: SocketAddr,
    /// Region used when a request names none.
    pub default_region: String,
    /// Regions that get a backend.
    pub regions: Vec<String>,
}

impl AppConfig {
    /// Reads `SC_MOCK_BIND_ADDR`, `SC_MOCK_DEFAULT_REGION` and
    /// `SC_MOCK_REGIONS` (comma separated), falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("SC_MOCK_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("SC_MOCK_BIND_ADDR must be a valid host:port")?;

        let default_region =
            lookup("SC_MOCK_DEFAULT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let regions = match lookup("SC_MOCK_REGIONS") {
            Some(raw) => parse_region_list(&raw),
            None => default_regions(),
        };

        let config = Self {
            bind_addr,
            default_region,
            regions,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    pub fn default_region(mut self, region: &str) -> Self {
        self.default_region = region.to_string();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            bail!("at least one region must be configured");
        }

        if !self.regions.contains(&self.default_region) {
            bail!(
                "default region '{}' is not among the configured regions",
                self.default_region
            );
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            default_region: DEFAULT_REGION.to_string(),
            regions: default_regions(),
        }
    }
}

fn default_regions() -> Vec<String> {
    SUPPORTED_REGIONS.iter().map(ToString::to_string).collect()
}

fn parse_region_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .map(ToString::to_string)
        .collect()
}
