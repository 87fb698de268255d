use super::UuidNotCompatible;

/// Failures reported by the persistence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Cart line not found.")]
    NotFound,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Quantity must be a positive integer, got {0}.")]
    InvalidQuantity(i64),
    #[error(transparent)]
    InvalidProductId(#[from] UuidNotCompatible),
    #[error("Cart could not be persisted: {0}")]
    Persistence(#[from] StoreError),
}
