//! Error types

use thiserror::Error;

/// Errors raised while writing markup.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
