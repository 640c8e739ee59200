//! escalas-core
//!
//! Pure domain types shared by the scale catalog, the scoring engine and the
//! result store. No I/O here: this is the vocabulary every other crate speaks.

pub mod error;
pub mod models;
