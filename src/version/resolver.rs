//! Supported macOS release resolution
//!
//! Formulae and casks describe platform support differently:
//! - Formula: one bottle file per release under `bottle.stable.files`
//! - Cask: a single minimum release under `depends_on.macos[">="]`,
//!   expanded through the [`SupportMatrix`]
//!
//! Both resolve to the same shape, an ordered set of release identifiers.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use serde_json::Value;

use crate::parser::types::PackageKind;
use crate::version::error::ResolveError;
use crate::version::matrix::SupportMatrix;

#[derive(Debug, Deserialize)]
struct FormulaMetadata {
    bottle: Bottle,
}

#[derive(Debug, Deserialize)]
struct Bottle {
    stable: BottleSpec,
}

#[derive(Debug, Deserialize)]
struct BottleSpec {
    files: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct CaskMetadata {
    depends_on: CaskDependsOn,
}

#[derive(Debug, Deserialize)]
struct CaskDependsOn {
    macos: MacosRequirement,
}

#[derive(Debug, Deserialize)]
struct MacosRequirement {
    #[serde(rename = ">=")]
    minimum: Vec<String>,
}

/// Compute the releases `response` declares support for, using the builtin matrix
pub fn resolve_supported_versions(
    response: &Value,
    kind: PackageKind,
) -> Result<IndexSet<String>, ResolveError> {
    resolve_with_matrix(response, kind, SupportMatrix::builtin())
}

/// Compute the releases `response` declares support for
pub fn resolve_with_matrix(
    response: &Value,
    kind: PackageKind,
    matrix: &SupportMatrix,
) -> Result<IndexSet<String>, ResolveError> {
    match kind {
        PackageKind::Formula => {
            let metadata = FormulaMetadata::deserialize(response)
                .map_err(|e| ResolveError::MissingMetadata(e.to_string()))?;
            Ok(metadata.bottle.stable.files.into_keys().collect())
        }
        PackageKind::Cask => {
            let metadata = CaskMetadata::deserialize(response)
                .map_err(|e| ResolveError::MissingMetadata(e.to_string()))?;
            let minimum = metadata
                .depends_on
                .macos
                .minimum
                .into_iter()
                .next()
                .ok_or_else(|| ResolveError::MissingMetadata("empty macOS requirement".into()))?;
            let constraint = format!(">={}", minimum);

            matrix
                .get(&constraint)
                .cloned()
                .ok_or(ResolveError::UnknownConstraint(constraint))
        }
    }
}
