use thiserror::Error;

use crate::parser::types::PackageKind;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status} for {package}")]
    UnexpectedStatus { package: String, status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Missing metadata: {0}")]
    MissingMetadata(String),

    #[error("Unknown macOS constraint: {0}")]
    UnknownConstraint(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("Unsupported formula type: {0}")]
    UnsupportedKind(PackageKind),
}
