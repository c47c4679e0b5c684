//! Error types

use thiserror::Error;

/// Errors raised while dispatching events or loading options.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The event targeted an id the control never renders.
    #[error("no pagination element with id '{0}'")]
    UnknownTarget(String),

    /// A change event targeted an element that is not a selector.
    #[error("element '{0}' does not accept change events")]
    NotASelect(String),

    /// The selector received a value that is not a page size.
    #[error("invalid value '{value}' for '{target}'")]
    InvalidValue { target: String, value: String },

    /// Options JSON could not be parsed.
    #[error("invalid pagination options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaginationError>;
