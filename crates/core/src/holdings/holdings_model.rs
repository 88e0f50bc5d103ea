//! Holding domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetType;
use crate::constants::MAX_POSITION_VALUE;
use crate::{errors::ValidationError, Error, Result};

/// A recorded position, as persisted by the storage collaborator.
///
/// The engine treats a `Holding` as an immutable snapshot; every derived
/// figure is recomputed from these fields on each read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Ticker or identifier (upper-cased on write)
    pub symbol: String,
    /// May be fractional (crypto)
    pub quantity: Decimal,
    /// Unit cost at acquisition
    pub purchase_price: Decimal,
    /// Unit market price
    pub current_price: Decimal,
    pub asset_type: AssetType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    /// `quantity × purchase_price`, saturating at the `Decimal` range.
    pub fn cost_basis(&self) -> Decimal {
        self.quantity.saturating_mul(self.purchase_price)
    }

    /// `quantity × current_price`, saturating at the `Decimal` range.
    pub fn market_value(&self) -> Decimal {
        self.quantity.saturating_mul(self.current_price)
    }
}

/// Input model for recording a new holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub user_id: String,
    pub name: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    #[serde(default)]
    pub asset_type: AssetType,
}

impl NewHolding {
    /// Validates the new holding data.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        validate_position_fields(
            &self.name,
            &self.symbol,
            self.quantity,
            self.purchase_price,
            self.current_price,
        )
    }

    /// Returns a copy with trimmed text fields and an upper-cased symbol.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.symbol = normalize_symbol(&self.symbol);
        self
    }
}

/// Input model for editing an existing holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub asset_type: AssetType,
}

impl HoldingUpdate {
    /// Validates the holding update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_input("Holding ID is required for updates"));
        }
        validate_position_fields(
            &self.name,
            &self.symbol,
            self.quantity,
            self.purchase_price,
            self.current_price,
        )
    }

    /// Returns a copy with trimmed text fields and an upper-cased symbol.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.symbol = normalize_symbol(&self.symbol);
        self
    }
}

/// Trims and upper-cases a ticker symbol.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

fn validate_position_fields(
    name: &str,
    symbol: &str,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_input("Holding name cannot be empty"));
    }
    if symbol.trim().is_empty() {
        return Err(Error::invalid_input("Holding symbol cannot be empty"));
    }
    if quantity < Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "Quantity cannot be negative: {}",
            quantity
        )));
    }
    if purchase_price < Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "Purchase price cannot be negative: {}",
            purchase_price
        )));
    }
    if current_price < Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "Current price cannot be negative: {}",
            current_price
        )));
    }
    validate_position_value("purchase", quantity, purchase_price)?;
    validate_position_value("current", quantity, current_price)
}

fn validate_position_value(label: &str, quantity: Decimal, price: Decimal) -> Result<()> {
    match quantity.checked_mul(price) {
        Some(value) if value <= MAX_POSITION_VALUE => Ok(()),
        _ => Err(Error::invalid_input(format!(
            "Position value at {} price exceeds the supported maximum of {}",
            label, MAX_POSITION_VALUE
        ))),
    }
}
