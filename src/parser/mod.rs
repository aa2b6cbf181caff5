//! Parser layer
//! - types.rs: Common types (PackageKind)
//! - brewfile.rs: Brewfile parser

pub mod brewfile;
pub mod types;

pub use brewfile::{BrewfileParser, ManifestError, read_packages};
pub use types::{PackageKind, PackageKindError};
