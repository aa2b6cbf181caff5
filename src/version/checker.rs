//! Compatibility evaluation for Brewfile packages

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ApiConfig, MacosVersion};
use crate::parser::types::PackageKind;
use crate::version::error::{CheckError, RegistryError};
use crate::version::registries::HomebrewRegistry;
use crate::version::registry::Registry;
use crate::version::resolver::resolve_supported_versions;

/// Support status of a package on the target release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatStatus {
    /// The target release is among the supported ones
    Supported,
    /// The package is known but does not support the target release
    Unsupported,
    /// The package exists but publishes no usable support information
    NoInfo,
    /// The package could not be found upstream
    Unknown,
}

impl CompatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatStatus::Supported => "Supported",
            CompatStatus::Unsupported => "Unsupported",
            CompatStatus::NoInfo => "No info",
            CompatStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CompatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub kind: PackageKind,
    pub package_name: String,
    pub status: CompatStatus,
}

/// Classify a single API lookup against `target`
pub fn classify(
    kind: PackageKind,
    package_name: &str,
    lookup: Result<Value, RegistryError>,
    target: MacosVersion,
) -> CompatStatus {
    match lookup {
        Ok(content) => match resolve_supported_versions(&content, kind) {
            Ok(supported) => {
                debug!(
                    "Supported versions for {} are: {:?}",
                    package_name, supported
                );
                if supported.contains(target.as_str()) {
                    CompatStatus::Supported
                } else {
                    CompatStatus::Unsupported
                }
            }
            Err(e) => {
                debug!("Could not get details for {} {}: {}", kind, package_name, e);
                CompatStatus::NoInfo
            }
        },
        Err(RegistryError::InvalidResponse(e)) => {
            debug!("Could not get details for {} {}: {}", kind, package_name, e);
            CompatStatus::NoInfo
        }
        Err(RegistryError::NotFound(_)) => {
            warn!("Unknown {}: {}", kind, package_name);
            CompatStatus::Unknown
        }
        Err(e) => {
            warn!("Unknown {}: {} ({})", kind, package_name, e);
            CompatStatus::Unknown
        }
    }
}

/// Evaluates packages against the registry serving their kind
pub struct Checker {
    registries: HashMap<PackageKind, Arc<dyn Registry>>,
}

impl Checker {
    /// Create a checker from registries, keyed by the kind each one serves
    pub fn new(registries: Vec<Arc<dyn Registry>>) -> Self {
        Self {
            registries: registries
                .into_iter()
                .map(|registry| (registry.kind(), registry))
                .collect(),
        }
    }

    /// Create a checker backed by the Homebrew API for every kind
    pub fn from_config(config: &ApiConfig) -> Result<Self, RegistryError> {
        let registries = PackageKind::ALL
            .iter()
            .map(|&kind| {
                HomebrewRegistry::from_config(config, kind)
                    .map(|registry| Arc::new(registry) as Arc<dyn Registry>)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(registries))
    }

    /// Fail unless a registry serves `kind`
    pub fn ensure_supported(&self, kind: PackageKind) -> Result<(), CheckError> {
        if self.registries.contains_key(&kind) {
            Ok(())
        } else {
            Err(CheckError::UnsupportedKind(kind))
        }
    }

    /// Check each name in order, one lookup at a time
    ///
    /// Per-package failures degrade that package's status and never abort the batch.
    pub async fn evaluate(
        &self,
        names: &[String],
        kind: PackageKind,
        target: MacosVersion,
    ) -> Result<Vec<StatusRecord>, CheckError> {
        let registry = self
            .registries
            .get(&kind)
            .ok_or(CheckError::UnsupportedKind(kind))?;

        let mut records = Vec::with_capacity(names.len());
        for name in names {
            let lookup = registry.fetch_metadata(name).await;
            records.push(StatusRecord {
                kind,
                package_name: name.clone(),
                status: classify(kind, name, lookup, target),
            });
        }

        Ok(records)
    }
}
