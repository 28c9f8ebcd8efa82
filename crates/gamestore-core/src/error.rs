//! Error types for Game Store

use thiserror::Error;

/// Main error type for cart store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Cart seed file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cart seed was not a valid list of items
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The same item id appeared twice in a seed
    #[error("Duplicate cart item: {0}")]
    DuplicateItem(String),

    /// Item prices add up to more than the cart total can hold
    #[error("Cart total overflows")]
    TotalOverflow,
}

/// Result type alias for Game Store operations
pub type Result<T> = std::result::Result<T, StoreError>;
