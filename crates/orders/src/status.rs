//! Status and payment vocabularies shared with the backend.
//!
//! Both are closed sets on the backend side, but drift happens: anything we do
//! not recognise is kept verbatim in an `Other` variant so that aggregates
//! still account for it.

use serde::{Deserialize, Serialize};

/// Order status lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Placed,
    OutForDelivery,
    Delivered,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Statuses a seller may pick from the console.
    pub const SELECTABLE: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire spelling used by the backend.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OrderStatus::Other(_))
    }

    /// Final states: nothing more happens to the order.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "Placed" => OrderStatus::Placed,
            "Out for Delivery" => OrderStatus::OutForDelivery,
            "Delivered" => OrderStatus::Delivered,
            "Cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match OrderStatus::from(value.as_str()) {
            OrderStatus::Other(_) => OrderStatus::Other(value),
            known => known,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the customer pays.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentType {
    /// Cash on delivery.
    Cod,
    Online,
    Other(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::Cod => "COD",
            PaymentType::Online => "Online",
            PaymentType::Other(raw) => raw,
        }
    }
}

impl From<&str> for PaymentType {
    fn from(value: &str) -> Self {
        match value {
            "COD" => PaymentType::Cod,
            "Online" => PaymentType::Online,
            other => PaymentType::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentType {
    fn from(value: String) -> Self {
        match PaymentType::from(value.as_str()) {
            PaymentType::Other(_) => PaymentType::Other(value),
            known => known,
        }
    }
}

impl From<PaymentType> for String {
    fn from(value: PaymentType) -> Self {
        match value {
            PaymentType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
