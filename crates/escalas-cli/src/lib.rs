//! escalas-cli library root.
//!
//! Exposes the command layer so integration tests can drive it with an
//! in-memory store instead of spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
