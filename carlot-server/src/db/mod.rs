//! Database gateway - connection pool and car stores
//!
//! # Design Principles
//!
//! - Bounded connection pool with scoped checkout - no shared Connection
//! - Every statement is parameterized
//! - Every call returns a Result; nothing escapes as a panic

pub mod config;
pub mod memory;
pub mod mysql;
pub mod pool;
pub mod store;

pub use config::DbConfig;
pub use memory::MemoryCarStore;
pub use mysql::MySqlCarStore;
pub use pool::{create_lazy_pool, create_pool};
pub use store::{CarStore, StoreError};
