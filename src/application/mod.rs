//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, codecs, ports)
//! - Does NOT contain encoding rules (those are in Domain and `emit`)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Load assets, emit the module, write it and the manifest

pub mod generate;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
