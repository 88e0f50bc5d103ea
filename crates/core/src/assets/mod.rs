//! Assets module - asset type classification.

mod assets_model;

pub use assets_model::AssetType;
