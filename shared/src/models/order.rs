//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::plate::PlateBody;
use crate::types::ObjectId;

/// One order line: an embedded plate snapshot and how many were ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderPlate {
    #[validate(nested)]
    pub plate: PlateBody,
    pub quantity: i64,
}

/// Order entity (a restaurant check bound to one table)
///
/// An order is "open" while `order_closed` is false. At most one open order
/// per table is intended, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub table_id: ObjectId,
    pub date: DateTime<Utc>,
    pub tip: f64,
    #[serde(default)]
    pub plates: Vec<OrderPlate>,
    pub order_closed: bool,
}

impl Order {
    pub fn is_open(&self) -> bool {
        !self.order_closed
    }
}

/// Create / replace order payload
///
/// Replacing an order writes every field, including the whole `plates` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderBody {
    pub user_id: ObjectId,
    pub table_id: ObjectId,
    pub date: DateTime<Utc>,
    pub tip: f64,
    #[serde(default)]
    #[validate(nested)]
    pub plates: Vec<OrderPlate>,
    pub order_closed: bool,
}

impl OrderBody {
    /// Total of all lines, before tip
    pub fn subtotal(&self) -> f64 {
        self.plates
            .iter()
            .map(|line| line.plate.price * line.quantity as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body_json() -> serde_json::Value {
        json!({
            "userId": "64b7f0c2a1e4d3f5a6b7c8d9",
            "tableId": "64b7f0c2a1e4d3f5a6b7c8da",
            "date": "2024-05-01T20:15:00Z",
            "tip": 2.5,
            "plates": [
                {
                    "plate": {
                        "name": "Paella",
                        "price": 14.0,
                        "description": "Arroz con marisco",
                        "code": "P01",
                        "categoryId": "64b7f0c2a1e4d3f5a6b7c8db"
                    },
                    "quantity": 2
                }
            ],
            "orderClosed": false
        })
    }

    #[test]
    fn test_order_body_camel_case() {
        let body: OrderBody = serde_json::from_value(body_json()).unwrap();
        assert_eq!(body.plates.len(), 1);
        assert!(!body.order_closed);
        assert_eq!(body.subtotal(), 28.0);
        assert!(body.validate().is_ok());

        let back = serde_json::to_value(&body).unwrap();
        assert_eq!(back["tableId"], "64b7f0c2a1e4d3f5a6b7c8da");
        assert_eq!(back["plates"][0]["plate"]["categoryId"], "64b7f0c2a1e4d3f5a6b7c8db");
    }

    #[test]
    fn test_nested_plate_is_validated() {
        let mut value = body_json();
        value["plates"][0]["plate"]["name"] = json!("");
        let body: OrderBody = serde_json::from_value(value).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_plates_default_to_empty() {
        let mut value = body_json();
        value.as_object_mut().unwrap().remove("plates");
        let body: OrderBody = serde_json::from_value(value).unwrap();
        assert!(body.plates.is_empty());
    }

    #[test]
    fn test_bad_table_id_rejected() {
        let mut value = body_json();
        value["tableId"] = json!("T1");
        assert!(serde_json::from_value::<OrderBody>(value).is_err());
    }
}
