//! Failure types raised by page assertions.
//!
//! Assertion failures and everything else are kept apart: only an
//! [`AssertionFailure`] is ever inspected for CSP noise, any other failure
//! passes through the classifier untouched.

use thiserror::Error;

/// A failed test assertion carrying the framework's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    /// Full assertion message, possibly spanning several lines.
    pub message: String,
}

impl AssertionFailure {
    /// Creates a failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any failure a page operation can raise.
#[derive(Debug, Error)]
pub enum PageFailure {
    /// The assertion ran and did not hold.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// The page could not be queried at all (driver crash, closed page, ...).
    #[error("page operation failed: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PageFailure {
    /// Wraps a non-assertion error.
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(error.into())
    }

    /// Returns the assertion failure, if this is one.
    #[must_use]
    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            Self::Other(_) => None,
        }
    }
}

/// A specialized Result type for page assertions.
pub type Result<T> = std::result::Result<T, PageFailure>;
