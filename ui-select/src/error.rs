//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown ui-select theme: {0}")]
    UnknownTheme(String),

    #[error("unknown ui-select attribute: {0}")]
    UnknownAttribute(String),

    #[error(transparent)]
    Markup(#[from] ngdom::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
