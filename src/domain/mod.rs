//! Domain Layer
//!
//! Pure data and transforms, no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Asset and AssetTable
//! - `value_objects/` - Names, hashes, modification times, build tags
//! - `codec/` - Escaped byte literals and hash-embedded names
//! - `ports/` - Interfaces implemented by the infrastructure layer

pub mod codec;
pub mod entities;
pub mod ports;
pub mod value_objects;
