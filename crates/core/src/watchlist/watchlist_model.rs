//! Watchlist domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assets::AssetType;
use crate::holdings::normalize_symbol;
use crate::{errors::ValidationError, Error, Result};

/// A symbol the user follows without holding it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    pub created_at: DateTime<Utc>,
}

/// Input model for adding a symbol to a watchlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWatchlistItem {
    pub user_id: String,
    pub symbol: String,
    /// Display name; the symbol is used when absent or blank
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub asset_type: AssetType,
}

impl NewWatchlistItem {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        Ok(())
    }

    /// Upper-cases the symbol and fills a blank name with it.
    pub fn normalized(mut self) -> Self {
        self.symbol = normalize_symbol(&self.symbol);
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.symbol.clone());
        self.name = Some(name);
        self
    }

    /// Name to store, after normalization.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }
}
