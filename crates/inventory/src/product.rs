use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult, Entity, ProductId, SaleId};

use crate::lenient;
use crate::sale::SaleEvent;

/// A stocked product as held by the document store.
///
/// `quantity` is kept exactly as stored so that malformed records survive a
/// round-trip untouched; classification goes through [`Product::on_hand`], which
/// never reports a negative count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    quantity: i64,
    #[serde(default, deserialize_with = "lenient::amount")]
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    last_sold_date: Option<DateTime<Utc>>,
}

/// Replacement values for an explicit product edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEdit {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub description: Option<String>,
}

/// Display classification of a product's stock level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Low,
    Healthy,
}

impl StockStatus {
    /// `Low` when strictly below `low_stock_threshold`.
    pub fn classify(on_hand: u64, low_stock_threshold: u64) -> Self {
        if on_hand < low_stock_threshold {
            StockStatus::Low
        } else {
            StockStatus::Healthy
        }
    }

    pub fn is_low(self) -> bool {
        matches!(self, StockStatus::Low)
    }
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> DomainResult<Self> {
        let name = validated_name(name.into())?;
        validate_quantity(quantity)?;
        validate_price(price)?;
        Ok(Self {
            id,
            name,
            quantity,
            price,
            description: None,
            last_sold_date: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalized_description(Some(description.into()));
        self
    }

    pub fn with_last_sold_date(mut self, at: DateTime<Utc>) -> Self {
        self.last_sold_date = Some(at);
        self
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored quantity, possibly negative if the record is malformed.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Stock on hand for classification; negative stored values count as zero.
    pub fn on_hand(&self) -> u64 {
        u64::try_from(self.quantity).unwrap_or(0)
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn last_sold_date(&self) -> Option<DateTime<Utc>> {
        self.last_sold_date
    }

    pub fn stock_status(&self, low_stock_threshold: u64) -> StockStatus {
        StockStatus::classify(self.on_hand(), low_stock_threshold)
    }

    /// Replace the editable fields. `last_sold_date` is preserved.
    ///
    /// Nothing is changed if the edit fails validation.
    pub fn apply_edit(&mut self, edit: ProductEdit) -> DomainResult<()> {
        let name = validated_name(edit.name)?;
        validate_quantity(edit.quantity)?;
        validate_price(edit.price)?;

        self.name = name;
        self.quantity = edit.quantity;
        self.price = edit.price;
        self.description = normalized_description(edit.description);
        Ok(())
    }

    /// Sell `units` from stock, returning the sale to record.
    ///
    /// Stock is decremented and `last_sold_date` set to `at`. The product is left
    /// untouched on error.
    pub fn sell(&mut self, units: u64, at: DateTime<Utc>) -> DomainResult<SaleEvent> {
        if units == 0 {
            return Err(DomainError::validation("units sold must be at least 1"));
        }

        let available = self.on_hand();
        if available == 0 {
            return Err(DomainError::out_of_stock(self.name.clone()));
        }
        if units > available {
            return Err(DomainError::InsufficientStock {
                product: self.name.clone(),
                requested: units,
                available,
            });
        }

        // `units <= available <= i64::MAX`, so the cast is lossless.
        self.quantity -= units as i64;
        self.last_sold_date = Some(at);

        Ok(SaleEvent::new(self.id.clone(), self.name.clone(), units, at).with_id(SaleId::new()))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validated_name(name: String) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("product name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation("quantity must be a non-negative number"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be a non-negative number"));
    }
    Ok(())
}

fn normalized_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
