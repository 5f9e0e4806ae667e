//! Vehicle records
//!
//! `Car` is a row as the store returns it; `NewCar` is a validated insert
//! request whose identifier the store assigns.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::ValidationError;

/// Maximum length for name and model (VARCHAR(255) in the cars table)
const MAX_TEXT_LEN: usize = 255;

/// A vehicle record from the `cars` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub model: String,
    pub price: Price,
}

/// Numeric price.
///
/// Whole values serialize as JSON integers so `20000` stays `20000`
/// instead of becoming `20000.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

/// Largest f64 that still converts to i64 without loss
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Price {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "price",
                reason: "must be a finite number",
            });
        }
        if value < 0.0 {
            return Err(ValidationError::InvalidFormat {
                field: "price",
                reason: "cannot be negative",
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Price {
    /// Unchecked conversion for values read back from the store.
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Validated insert request.
///
/// # Example
/// ```
/// use carlot_server::models::NewCar;
///
/// assert!(NewCar::new("Civic", "2020", 20000.0).is_ok());
/// assert!(NewCar::new("", "2020", 20000.0).is_err());   // empty name
/// assert!(NewCar::new("Civic", "2020", -1.0).is_err()); // negative price
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    name: String,
    model: String,
    price: Price,
}

impl NewCar {
    pub fn new(name: &str, model: &str, price: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: text_field("name", name)?,
            model: text_field("model", model)?,
            price: Price::new(price)?,
        })
    }

    /// Build from a decoded JSON body.
    ///
    /// Requires an object with `name` (string), `model` (string) and
    /// `price` (number). Extra keys are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let obj = body
            .as_object()
            .ok_or_else(|| ValidationError::MalformedBody {
                reason: "expected a JSON object".to_string(),
            })?;

        let name = string_field(obj, "name")?;
        let model = string_field(obj, "model")?;
        let price = match obj.get("price") {
            None | Some(Value::Null) => return Err(ValidationError::Missing { field: "price" }),
            Some(v) => v.as_f64().ok_or(ValidationError::InvalidFormat {
                field: "price",
                reason: "must be a number",
            })?,
        };

        Self::new(name, model, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Attach a store-assigned identifier.
    pub fn into_car(self, id: i64) -> Car {
        Car {
            id,
            name: self.name,
            model: self.model,
            price: self.price,
        }
    }
}

/// Store acknowledgment for an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsertAck {
    /// Identifier assigned by the store
    pub id: u64,
    pub affected_rows: u64,
}

fn string_field<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a string",
        }),
    }
}

fn text_field(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_price_serializes_as_integer() {
        let car = Car {
            id: 1,
            name: "Civic".into(),
            model: "2020".into(),
            price: Price::from(20000.0),
        };
        assert_eq!(
            serde_json::to_string(&car).unwrap(),
            r#"{"id":1,"name":"Civic","model":"2020","price":20000}"#
        );
    }

    #[test]
    fn fractional_price_keeps_decimals() {
        let price = Price::from(19999.99);
        assert_eq!(serde_json::to_value(price).unwrap(), json!(19999.99));
    }

    #[test]
    fn car_reads_back_from_response_json() {
        let car: Car = serde_json::from_value(
            json!({"id": 3, "name": "Civic", "model": "2020", "price": 20000}),
        )
        .unwrap();
        assert_eq!(car.id, 3);
        assert_eq!(car.price, Price::from(20000.0));
    }

    #[test]
    fn from_json_accepts_valid_body() {
        let car = NewCar::from_json(&json!({"name": "Model3", "model": "2023", "price": 40000}))
            .unwrap();
        assert_eq!(car.name(), "Model3");
        assert_eq!(car.model(), "2023");
        assert_eq!(car.price().value(), 40000.0);
    }

    #[test]
    fn from_json_trims_text() {
        let car = NewCar::from_json(&json!({"name": "  Civic ", "model": "2020", "price": 1}))
            .unwrap();
        assert_eq!(car.name(), "Civic");
    }

    #[test]
    fn from_json_rejects_missing_fields() {
        let err = NewCar::from_json(&json!({"model": "2023", "price": 1})).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "name" });

        let err = NewCar::from_json(&json!({"name": "a", "model": "b"})).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "price" });
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        let err = NewCar::from_json(&json!({"name": 5, "model": "b", "price": 1})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "name", .. }));

        let err =
            NewCar::from_json(&json!({"name": "a", "model": "b", "price": "40000"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "price", .. }));
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = NewCar::from_json(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedBody { .. }));
    }

    #[test]
    fn rejects_long_name() {
        let long = "x".repeat(256);
        let err = NewCar::new(&long, "2020", 1.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "name",
                max: 255
            }
        );
    }

    #[test]
    fn rejects_bad_prices() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(-0.5).is_err());
        assert!(Price::new(0.0).is_ok());
    }

    #[test]
    fn into_car_keeps_fields() {
        let car = NewCar::new("Civic", "2020", 20000.0).unwrap().into_car(7);
        assert_eq!(car.id, 7);
        assert_eq!(car.name, "Civic");
        assert_eq!(car.price, Price::from(20000.0));
    }
}
