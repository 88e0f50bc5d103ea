use async_trait::async_trait;

use super::watchlist_model::{NewWatchlistItem, WatchlistItem};
use crate::errors::Result;

/// Trait defining the contract for watchlist storage.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<WatchlistItem>>;

    /// Stores a normalized item.
    async fn create(&self, new_item: NewWatchlistItem) -> Result<WatchlistItem>;

    /// Returns the number of deleted records.
    async fn delete(&self, item_id: &str) -> Result<usize>;
}

/// Trait for watchlist service operations.
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    async fn get_watchlist(&self, user_id: &str) -> Result<Vec<WatchlistItem>>;
    async fn add_item(&self, new_item: NewWatchlistItem) -> Result<WatchlistItem>;
    async fn remove_item(&self, item_id: &str) -> Result<()>;
}
