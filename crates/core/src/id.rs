//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a product.
///
/// Product ids are assigned by the document store and are opaque to this
/// workspace: any non-empty string is accepted and compared verbatim. Decoding
/// applies the same check as [`ProductId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id, rejecting blank values.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a recorded sale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(SaleId, "SaleId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_rejects_blank() {
        assert!(matches!(
            ProductId::new("   "),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn product_id_serializes_as_plain_string() {
        let id: ProductId = "abc123".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        let back: ProductId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn product_id_decoding_rejects_blank() {
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
        assert!(serde_json::from_str::<ProductId>("\"  \"").is_err());
    }

    #[test]
    fn sale_id_parse_error_names_type() {
        let err = "not-a-uuid".parse::<SaleId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("SaleId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }
}
