//! Error types for valuation and comparison

use thiserror::Error;

/// Failure raised before any arithmetic is attempted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ValuationError>;
