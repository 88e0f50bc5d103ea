//! Watchlist module - followed symbols per user.

mod watchlist_model;
mod watchlist_service;
mod watchlist_traits;

pub use watchlist_model::{NewWatchlistItem, WatchlistItem};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
