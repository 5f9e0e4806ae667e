//! Domain models with validation at construction
//!
//! Request bodies become a [`NewCar`] only after validation, so nothing
//! malformed reaches the store. Invalid input returns ValidationError, not panic.

pub mod car;
pub mod validation;

pub use car::{Car, InsertAck, NewCar, Price};
pub use validation::ValidationError;
