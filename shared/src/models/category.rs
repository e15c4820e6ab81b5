//! Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::ObjectId;

/// Menu category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub image_url: String,
}

/// Create / replace category payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBody {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub image_url: String,
}
