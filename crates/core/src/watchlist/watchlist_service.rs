use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::watchlist_model::{NewWatchlistItem, WatchlistItem};
use super::watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::errors::Result;

pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
}

impl WatchlistService {
    pub fn new(repository: Arc<dyn WatchlistRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    async fn get_watchlist(&self, user_id: &str) -> Result<Vec<WatchlistItem>> {
        self.repository.list_by_user(user_id).await
    }

    async fn add_item(&self, new_item: NewWatchlistItem) -> Result<WatchlistItem> {
        new_item.validate()?;
        let new_item = new_item.normalized();
        debug!(
            "Adding {} to watchlist of user {}",
            new_item.symbol, new_item.user_id
        );
        self.repository.create(new_item).await
    }

    /// Removing an item that is already gone is not an error.
    async fn remove_item(&self, item_id: &str) -> Result<()> {
        if self.repository.delete(item_id).await? == 0 {
            warn!("Watchlist item {} was not found", item_id);
        }
        Ok(())
    }
}
