//! Car store trait - the seam between HTTP handlers and the database

use async_trait::async_trait;

use crate::models::{Car, InsertAck, NewCar};

/// Any failure in the database layer.
///
/// Connection loss, rejected statements and constraint violations are not
/// distinguished; handlers map all of them to a 500.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// No identifier left to assign
    #[error("identifier space exhausted")]
    IdsExhausted,
}

/// Trait for car persistence (testable)
#[async_trait]
pub trait CarStore: Send + Sync {
    /// All records, in store-defined order.
    async fn list_all(&self) -> Result<Vec<Car>, StoreError>;

    /// Zero or one record whose identifier equals `id`. Absence is not an error.
    async fn fetch_by_id(&self, id: i64) -> Result<Vec<Car>, StoreError>;

    /// Insert a record and return the store-assigned identifier.
    async fn insert(&self, car: NewCar) -> Result<InsertAck, StoreError>;

    /// Current row count.
    async fn count(&self) -> Result<i64, StoreError>;
}
