//! Crate error type, following the custom-error-enum pattern for libraries.

use thiserror::Error;

/// Errors produced by pattern constructors.
/// Each variant represents a distinct failure mode; there is exactly one.
#[derive(Error, Debug, PartialEq)]
pub enum PatternError {
    #[error("the items sequence is required")]
    MissingItems,
}

pub type Result<T> = std::result::Result<T, PatternError>;
