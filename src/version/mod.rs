//! Compatibility layer for Brewfile packages
//!
//! This module fetches package metadata from the Homebrew API, resolves the
//! macOS releases each package supports, and classifies packages against a
//! target release.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Checker   │────▶│StatusRecord │
//! │  (fetch)    │     │ (classify)  │     │  (report)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │  Resolver   │──▶ SupportMatrix
//! │ (homebrew)  │     │(bottle/cask)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Per-package status classification and the evaluation loop
//! - [`error`]: Error types for registry, resolution and evaluation
//! - [`matrix`]: Cask minimum-release lookup table
//! - [`registry`]: Registry trait for fetching package metadata
//! - [`registries`]: Homebrew API registry implementation
//! - [`resolver`]: Supported release resolution per package kind

pub mod checker;
pub mod error;
pub mod matrix;
pub mod registries;
pub mod registry;
pub mod resolver;
