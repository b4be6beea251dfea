//! Core error type.
//!
//! Sub-crates define their own error enums (`GridError`, `PlanError`, …) and
//! either convert `CoreError` via `From` or wrap it as one variant; both
//! patterns appear in the workspace — prefer whichever keeps error sites
//! clean.

use thiserror::Error;

/// Errors produced by `fleet-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fleet-core`.
pub type CoreResult<T> = Result<T, CoreError>;
