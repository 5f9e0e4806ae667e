//! In-process car store
//!
//! Used by the router tests and by `carlot serve --memory` to run the API
//! without a database. Identifiers start at 1 and are never reused.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{CarStore, StoreError};
use crate::models::{Car, InsertAck, NewCar};

#[derive(Debug)]
struct Inner {
    cars: Vec<Car>,
    /// `None` once `i64::MAX` has been handed out
    next_id: Option<i64>,
}

/// Memory-backed car store
#[derive(Debug)]
pub struct MemoryCarStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryCarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCarStore {
    pub fn new() -> Self {
        Self::with_cars(Vec::new())
    }

    /// Seed the store with existing rows. New identifiers continue after the
    /// largest seeded one.
    pub fn with_cars(cars: Vec<Car>) -> Self {
        let next_id = match cars.iter().map(|c| c.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            inner: RwLock::new(Inner { cars, next_id }),
        }
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn list_all(&self) -> Result<Vec<Car>, StoreError> {
        Ok(self.inner.read().await.cars.clone())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Vec<Car>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.cars.iter().filter(|c| c.id == id).cloned().collect())
    }

    async fn insert(&self, car: NewCar) -> Result<InsertAck, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.ok_or(StoreError::IdsExhausted)?;
        inner.next_id = id.checked_add(1);
        inner.cars.push(car.into_car(id));

        Ok(InsertAck {
            id: id as u64,
            affected_rows: 1,
        })
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.cars.len() as i64)
    }
}
