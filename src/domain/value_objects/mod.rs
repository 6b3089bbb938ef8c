//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_name;
mod build_tags;
mod hash;
mod mod_time;
mod module_name;

pub use asset_name::AssetName;
pub use build_tags::{BuildTags, CfgPredicate};
pub use hash::{is_hash_hex, ContentHash};
pub use mod_time::ModTime;
pub use module_name::ModuleName;
