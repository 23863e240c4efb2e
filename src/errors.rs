//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`ResourceError`] covers all failure modes including:
//! - Dispatch failures (no plugin for a format or language)
//! - Plugin construction failures
//! - Configuration and I/O errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ResourceError>`.
//!
//! ```rust,ignore
//! use relic::errors::{ResourceError, Result};
//!
//! fn load_asset() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the resource-management core.
///
/// Each variant provides specific context about what went wrong.
/// Ambiguous path resolution is not represented here: it is resolved
/// deterministically and logged, never raised.
#[derive(Error, Debug)]
pub enum ResourceError {
    // ========================================================================
    // Dispatch Errors
    // ========================================================================
    /// No registered plugin accepts the resource's file extension.
    /// Carries the originally requested filename.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// No registered script plugin accepts the requested language.
    #[error("Unsupported scripting language: {0}")]
    UnsupportedLanguage(String),

    // ========================================================================
    // Plugin Errors
    // ========================================================================
    /// A plugin failed to construct a resource from its input.
    #[error("Resource load error: {0}")]
    Load(String),

    // ========================================================================
    // I/O & Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse error.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias for `Result<T, ResourceError>`.
pub type Result<T> = std::result::Result<T, ResourceError>;
