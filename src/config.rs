use clap::ValueEnum;

use crate::parser::types::PackageKind;

// =============================================================================
// File-related constants
// =============================================================================

/// Brewfile looked up in the current directory when no path is given
pub const DEFAULT_MANIFEST: &str = "Brewfile";

/// File written by `--export`, relative to the current directory
pub const EXPORT_FILE: &str = "compatibility.csv";

// =============================================================================
// API-related constants
// =============================================================================

/// Base URL of the Homebrew formulae API
pub const DEFAULT_API_URL: &str = "https://formulae.brew.sh/api";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "BREW_COMPAT_API_URL";

/// User agent sent with every API request
pub const USER_AGENT: &str = "brew-compat";

/// macOS releases a Brewfile can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum MacosVersion {
    #[value(name = "arm64_big_sur")]
    Arm64BigSur,
    #[default]
    BigSur,
    Catalina,
    Mojave,
    HighSierra,
    Sierra,
    ElCapitan,
}

impl MacosVersion {
    /// Identifier as used in bottle file listings
    pub fn as_str(&self) -> &'static str {
        match self {
            MacosVersion::Arm64BigSur => "arm64_big_sur",
            MacosVersion::BigSur => "big_sur",
            MacosVersion::Catalina => "catalina",
            MacosVersion::Mojave => "mojave",
            MacosVersion::HighSierra => "high_sierra",
            MacosVersion::Sierra => "sierra",
            MacosVersion::ElCapitan => "el_capitan",
        }
    }
}

impl std::fmt::Display for MacosVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Homebrew API configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL; `/formula` and `/cask` endpoints live beneath it
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint serving metadata for `kind`
    pub fn endpoint(&self, kind: PackageKind) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            kind.api_segment()
        )
    }
}
