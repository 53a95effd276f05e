//! Domain Errors

use thiserror::Error;

/// Rejected cart operations. The cart is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("no size selected")]
    NoSizeSelected,
    #[error("cart is empty")]
    EmptyCart,
}

/// Failure to load the character page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("failed to decode character page: {0}")]
    Decode(String),
}
