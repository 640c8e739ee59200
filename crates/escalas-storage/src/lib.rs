//! escalas-storage
//!
//! The result log: append-only history of saved scores. [`store::ResultStore`]
//! is the seam; [`file::JsonFileStore`] persists to a local JSON file and
//! [`memory::MemoryStore`] stands in for it in tests.

pub mod error;
pub mod file;
pub mod memory;
pub mod state;
pub mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::ResultStore;
