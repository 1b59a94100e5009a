use thiserror::Error;

/// Errors raised below the transport layer.
///
/// `NotFound` is the only domain-level failure the service reports; anything
/// else (connection loss, constraint violation, driver bug) is an unexpected
/// storage failure and surfaces as `Internal`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Product not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}
