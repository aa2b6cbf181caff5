//! Registry implementations for fetching package metadata

pub mod homebrew;

pub use homebrew::HomebrewRegistry;
