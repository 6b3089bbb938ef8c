//! Pure string codecs used while encoding assets
//!
//! - `literal` - bytes to `\xHH` escaped literal bodies and back
//! - `hashed_name` - join/strip/detect for cache-busting file names

pub mod hashed_name;
pub mod literal;
