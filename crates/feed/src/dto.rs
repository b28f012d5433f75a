//! Wire shapes of the backend responses.
//!
//! Required fields are still `Option` here so that a missing field is reported
//! by name, with the record index, instead of as a generic decode error.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

// -------------------------
// Envelopes
// -------------------------

/// `GET /api/order/seller` and `GET /api/order/user`.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

/// `GET /api/product/list`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

// -------------------------
// Records
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub payment_type: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    /// RFC 3339, e.g. `2024-01-15T10:00:00.000Z`.
    pub created_at: Option<String>,
    pub items: Option<Vec<LineItemRecord>>,
    #[serde(default)]
    pub address: Option<Map<String, JsonValue>>,
}

#[derive(Debug, Deserialize)]
pub struct LineItemRecord {
    pub product: Option<ProductRef>,
    pub quantity: Option<i64>,
}

/// Line items carry either the product id or, when the backend populated the
/// reference, the whole product document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl ProductRef {
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Id(id) => id,
            ProductRef::Populated { id } => id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub offer_price: Option<f64>,
    pub in_stock: Option<bool>,
}
