//! escalas-scales
//!
//! Bedside scale definitions and the engine that scores them. Pure data and
//! pure functions: no storage dependency.
//!
//! Scales are declared as [`definition::ScaleDefinition`] values, validated
//! once when the [`catalog::Catalog`] is built, and scored by
//! [`engine::evaluate`] whatever the scale.

pub mod catalog;
pub mod definition;
pub mod engine;
pub mod error;
pub mod instance;
pub mod scales;
pub mod validate;

pub use catalog::Catalog;
pub use definition::ScaleDefinition;
pub use engine::{evaluate, try_evaluate};
pub use instance::ScaleInstance;
