//! In-memory holding repository shared by service tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::RwLock;
use uuid::Uuid;

use super::{Holding, HoldingRepositoryTrait, HoldingUpdate, NewHolding};
use crate::assets::AssetType;
use crate::errors::{Error, Result};

#[derive(Default)]
pub struct MockHoldingRepository {
    pub holdings: RwLock<Vec<Holding>>,
    /// When set, every call fails with this repository error
    pub failure: Option<String>,
}

impl MockHoldingRepository {
    pub fn with_holdings(holdings: Vec<Holding>) -> Self {
        Self {
            holdings: RwLock::new(holdings),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            holdings: RwLock::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(Error::Repository(message.clone())),
            None => Ok(()),
        }
    }

    fn materialize(new_holding: NewHolding) -> Holding {
        let now = Utc::now();
        Holding {
            id: Uuid::new_v4().to_string(),
            user_id: new_holding.user_id,
            name: new_holding.name,
            symbol: new_holding.symbol,
            quantity: new_holding.quantity,
            purchase_price: new_holding.purchase_price,
            current_price: new_holding.current_price,
            asset_type: new_holding.asset_type,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl HoldingRepositoryTrait for MockHoldingRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Holding>> {
        self.check()?;
        Ok(self
            .holdings
            .read()
            .unwrap()
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, holding_id: &str) -> Result<Holding> {
        self.check()?;
        self.holdings
            .read()
            .unwrap()
            .iter()
            .find(|h| h.id == holding_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Holding {}", holding_id)))
    }

    async fn create(&self, new_holding: NewHolding) -> Result<Holding> {
        self.check()?;
        let holding = Self::materialize(new_holding);
        self.holdings.write().unwrap().push(holding.clone());
        Ok(holding)
    }

    async fn create_many(&self, new_holdings: Vec<NewHolding>) -> Result<Vec<Holding>> {
        self.check()?;
        let created: Vec<Holding> = new_holdings.into_iter().map(Self::materialize).collect();
        self.holdings.write().unwrap().extend(created.iter().cloned());
        Ok(created)
    }

    async fn update(&self, holding_update: HoldingUpdate) -> Result<Holding> {
        self.check()?;
        let mut holdings = self.holdings.write().unwrap();
        let existing = holdings
            .iter_mut()
            .find(|h| h.id == holding_update.id)
            .ok_or_else(|| Error::NotFound(format!("Holding {}", holding_update.id)))?;
        existing.name = holding_update.name;
        existing.symbol = holding_update.symbol;
        existing.quantity = holding_update.quantity;
        existing.purchase_price = holding_update.purchase_price;
        existing.current_price = holding_update.current_price;
        existing.asset_type = holding_update.asset_type;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, holding_id: &str) -> Result<usize> {
        self.check()?;
        let mut holdings = self.holdings.write().unwrap();
        let before = holdings.len();
        holdings.retain(|h| h.id != holding_id);
        Ok(before - holdings.len())
    }
}

/// Builds a stored holding for tests.
pub fn stored_holding(
    id: &str,
    user_id: &str,
    asset_type: AssetType,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    created_at: DateTime<Utc>,
) -> Holding {
    Holding {
        id: id.to_string(),
        user_id: user_id.to_string(),
        name: format!("{} holding", id),
        symbol: id.to_uppercase(),
        quantity,
        purchase_price,
        current_price,
        asset_type,
        created_at,
        updated_at: created_at,
    }
}
