//! carlot-server: JSON API over the `cars` table
//!
//! Exposes list, fetch-by-id and insert for vehicle records via HTTP,
//! backed by MySQL through a bounded sqlx pool.

pub mod db;
pub mod http;
pub mod models;

pub use db::{CarStore, DbConfig, MemoryCarStore, MySqlCarStore, StoreError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use models::{Car, InsertAck, NewCar, Price, ValidationError};
