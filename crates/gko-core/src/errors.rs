//! Cross-cutting error types for gko.
//!
//! Parsing errors live in `gko-parser` and configuration errors in
//! `gko-config`; they converge in `gko-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised while rendering an outline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The nested form could not be encoded. Indicates a programming defect,
    /// never malformed input.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
