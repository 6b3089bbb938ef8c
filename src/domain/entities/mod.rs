//! Domain Entities
//!
//! - `Asset` - One file to embed, with derived hash and size
//! - `AssetTable` - Ordered assets plus a name index

mod asset;
mod asset_table;

pub use asset::Asset;
pub use asset_table::AssetTable;
