//! Registry trait for fetching package metadata from the Homebrew API

#[cfg(test)]
use mockall::automock;

use crate::parser::types::PackageKind;
use crate::version::error::RegistryError;

/// Trait for fetching the metadata document of a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Returns the kind of package this registry serves
    fn kind(&self) -> PackageKind;

    /// Fetches the raw metadata document for a package
    ///
    /// # Arguments
    /// * `package_name` - The name as declared in the Brewfile (e.g., "wget")
    ///
    /// # Returns
    /// * `Ok(Value)` - The JSON document served for the package
    /// * `Err(RegistryError)` - If the package is unknown or the fetch fails
    async fn fetch_metadata(
        &self,
        package_name: &str,
    ) -> Result<serde_json::Value, RegistryError>;
}
