//! Plate Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::ObjectId;

/// Plate entity (菜品)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    pub description: String,
    pub code: String,
    /// Category reference, not checked for existence
    pub category_id: ObjectId,
}

impl Plate {
    /// Copy of the catalog data, for embedding into an order
    pub fn snapshot(&self) -> PlateBody {
        PlateBody {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            code: self.code.clone(),
            category_id: self.category_id,
        }
    }
}

/// Create / replace plate payload
///
/// Also the shape embedded inside orders: an order line keeps its own copy,
/// later catalog edits do not reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlateBody {
    #[validate(length(min = 1))]
    pub name: String,
    pub price: f64,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub code: String,
    pub category_id: ObjectId,
}
