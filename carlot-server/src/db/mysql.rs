//! MySQL-backed car store
//!
//! Identifier and price are coerced in SQL so decoding does not depend on the
//! exact column types of the pre-existing `cars` table. `price * 1e0` yields a
//! DOUBLE on MySQL 5.7 as well; `CAST(... AS DOUBLE)` needs 8.0.17.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use super::store::{CarStore, StoreError};
use crate::models::{Car, InsertAck, NewCar, Price};

const SELECT_ALL: &str = r#"
    SELECT CAST(id AS SIGNED) AS id, name, model, price * 1e0 AS price
    FROM cars
"#;

const SELECT_BY_ID: &str = r#"
    SELECT CAST(id AS SIGNED) AS id, name, model, price * 1e0 AS price
    FROM cars
    WHERE id = ?
"#;

const INSERT: &str = "INSERT INTO cars (name, model, price) VALUES (?, ?, ?)";

const COUNT: &str = "SELECT COUNT(*) FROM cars";

/// Car store over a pooled MySQL connection
#[derive(Clone)]
pub struct MySqlCarStore {
    pool: MySqlPool,
}

impl MySqlCarStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn car_from_row(row: &MySqlRow) -> Result<Car, sqlx::Error> {
    Ok(Car {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        model: row.try_get("model")?,
        price: Price::from(row.try_get::<f64, _>("price")?),
    })
}

#[async_trait]
impl CarStore for MySqlCarStore {
    async fn list_all(&self) -> Result<Vec<Car>, StoreError> {
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;
        let cars = rows
            .iter()
            .map(car_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = cars.len(), "listed cars");
        Ok(cars)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Vec<Car>, StoreError> {
        let rows = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(car_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::from)
    }

    async fn insert(&self, car: NewCar) -> Result<InsertAck, StoreError> {
        let result = sqlx::query(INSERT)
            .bind(car.name())
            .bind(car.model())
            .bind(car.price().value())
            .execute(&self.pool)
            .await?;

        let ack = InsertAck {
            id: result.last_insert_id(),
            affected_rows: result.rows_affected(),
        };
        tracing::debug!(id = ack.id, "inserted car");
        Ok(ack)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(COUNT).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_lazy_pool, create_pool, DbConfig};
    use std::time::Duration;

    // Integration tests - run with DATABASE_URL set against a database
    // that has the cars table:
    // cargo test -p carlot-server -- --ignored

    async fn live_store() -> MySqlCarStore {
        let config = DbConfig {
            url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..Default::default()
        };
        MySqlCarStore::new(create_pool(&config).await.expect("pool creation failed"))
    }

    #[tokio::test]
    async fn unreachable_database_is_a_store_error() {
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            acquire_timeout: Duration::from_millis(500),
            ..Default::default()
        };
        let store = MySqlCarStore::new(create_lazy_pool(&config).unwrap());

        assert!(matches!(store.list_all().await, Err(StoreError::Sqlx(_))));
        // Still usable after a failure
        assert!(store.count().await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_length_matches_count() {
        let store = live_store().await;
        let cars = store.list_all().await.unwrap();
        let count = store.count().await.unwrap();
        assert_eq!(cars.len() as i64, count);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_fetch() {
        let store = live_store().await;
        let car = NewCar::new("Model3", "2023", 40000.0).unwrap();
        let ack = store.insert(car).await.unwrap();
        assert_eq!(ack.affected_rows, 1);

        let found = store.fetch_by_id(ack.id as i64).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Model3");
        assert_eq!(found[0].price, Price::from(40000.0));

        let all = store.list_all().await.unwrap();
        assert!(all.iter().any(|c| c.id == ack.id as i64));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn fetch_missing_is_empty() {
        let store = live_store().await;
        let found = store.fetch_by_id(i64::MAX).await.unwrap();
        assert!(found.is_empty());
    }
}
