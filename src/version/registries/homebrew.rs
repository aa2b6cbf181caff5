//! Homebrew formulae API implementation
//!
//! Formulae and casks are served from sibling endpoints:
//! `<base>/formula/<name>.json` and `<base>/cask/<name>.json`.

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::{ApiConfig, USER_AGENT};
use crate::parser::types::PackageKind;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Registry implementation for one endpoint of the Homebrew API
pub struct HomebrewRegistry {
    client: Client,
    kind: PackageKind,
    endpoint: String,
}

impl HomebrewRegistry {
    /// Creates a registry for `kind` served at `endpoint`
    pub fn new(kind: PackageKind, endpoint: &str) -> Result<Self, RegistryError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            kind,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a registry for `kind` below the configured API base URL
    pub fn from_config(config: &ApiConfig, kind: PackageKind) -> Result<Self, RegistryError> {
        Self::new(kind, &config.endpoint(kind))
    }

    fn package_url(&self, package_name: &str) -> String {
        format!("{}/{}.json", self.endpoint, package_name)
    }
}

#[async_trait::async_trait]
impl Registry for HomebrewRegistry {
    fn kind(&self) -> PackageKind {
        self.kind
    }

    async fn fetch_metadata(
        &self,
        package_name: &str,
    ) -> Result<serde_json::Value, RegistryError> {
        let url = self.package_url(package_name);
        debug!("Querying: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if status != StatusCode::OK {
            warn!("Homebrew API returned status {}: {}", status, url);
            return Err(RegistryError::UnexpectedStatus {
                package: package_name.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse Homebrew API response for {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}
