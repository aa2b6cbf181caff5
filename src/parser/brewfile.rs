//! Brewfile parser
//!
//! Extracts package names from `brew` and `cask` declarations.
//! A line belongs to a kind when it starts with that kind's keyword; the
//! first double-quoted token on the line is the package name.
//!
//! Format examples:
//! - Formula: `brew "wget"`
//! - Formula with options: `brew "mysql@5.7", restart_service: true`
//! - Cask: `cask "firefox"`

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::parser::types::PackageKind;

/// Error type for reading a Brewfile
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Brewfile does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parser for Brewfile declarations
pub struct BrewfileParser {
    /// Regex for the quoted package name: `"wget"`
    quoted_name_re: Regex,
}

impl BrewfileParser {
    pub fn new() -> Self {
        Self {
            quoted_name_re: Regex::new(r#""(.+?)""#).expect("quoted name pattern is valid"),
        }
    }

    /// Extract the names declared with `kind`'s keyword, in file order
    pub fn parse(&self, content: &str, kind: PackageKind) -> Vec<String> {
        content
            .lines()
            .filter(|line| line.starts_with(kind.keyword()))
            .filter_map(|line| {
                let name = self
                    .quoted_name_re
                    .captures(line)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string());
                if name.is_none() {
                    debug!("Skipping {} line without a quoted name: {}", kind, line);
                }
                name
            })
            .collect()
    }
}

impl Default for BrewfileParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a Brewfile and return the names declared for `kind`
pub fn read_packages(path: &Path, kind: PackageKind) -> Result<Vec<String>, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ManifestError::NotFound(path.to_path_buf()),
        _ => ManifestError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(BrewfileParser::new().parse(&content, kind))
}
