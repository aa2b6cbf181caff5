//! Common types for parsers

use std::fmt;

/// Kind of package declared in a Brewfile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// Command-line package (`brew "wget"`)
    Formula,
    /// GUI application (`cask "firefox"`)
    Cask,
}

impl PackageKind {
    /// All kinds, in the order a Brewfile is evaluated
    pub const ALL: [PackageKind; 2] = [PackageKind::Formula, PackageKind::Cask];

    /// Keyword that starts a declaration line of this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            PackageKind::Formula => "brew",
            PackageKind::Cask => "cask",
        }
    }

    /// Path segment of the formulae API serving this kind
    pub fn api_segment(&self) -> &'static str {
        match self {
            PackageKind::Formula => "formula",
            PackageKind::Cask => "cask",
        }
    }

    /// Label shown in the report's Kind column
    pub fn label(&self) -> &'static str {
        match self {
            PackageKind::Formula => "Bottle",
            PackageKind::Cask => "Application",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Returned when a declaration keyword does not name a supported kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported formula type: {0}")]
pub struct PackageKindError(pub String);

impl std::str::FromStr for PackageKind {
    type Err = PackageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brew" => Ok(PackageKind::Formula),
            "cask" => Ok(PackageKind::Cask),
            other => Err(PackageKindError(other.to_string())),
        }
    }
}
