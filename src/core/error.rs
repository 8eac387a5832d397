//! Error types for terrain generation

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("mesh error: {0}")]
    Mesh(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
