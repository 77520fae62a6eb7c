//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// identifiers, stock availability). Data-fetch and transport failures belong to
/// the layers that perform the IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty or unparsable).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A sale was attempted on a product with no stock on hand.
    #[error("{product} is out of stock")]
    OutOfStock { product: String },

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u64,
        available: u64,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn out_of_stock(product: impl Into<String>) -> Self {
        Self::OutOfStock {
            product: product.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_names_both_quantities() {
        let err = DomainError::InsufficientStock {
            product: "Widget".to_string(),
            requested: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for Widget: requested 5, available 2"
        );
    }

    #[test]
    fn out_of_stock_message_names_product() {
        assert_eq!(
            DomainError::out_of_stock("Widget").to_string(),
            "Widget is out of stock"
        );
    }
}
