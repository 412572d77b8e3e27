//! Redemption order types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::Product;
use super::user::User;

/// Fulfilment status; the `preparing -> delivered` transition is
/// backend-driven and never applied locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Preparing,
    Delivered,
}

impl OrderStatus {
    /// Wire representation, as used in query strings and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparing => "preparing",
            Self::Delivered => "delivered",
        }
    }
}

/// Redemption order snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionOrder {
    pub id: i64,
    /// Unique, backend-generated order number.
    pub order_number: String,
    pub user_id: i64,
    pub product_id: i64,
    /// Product name captured at redemption time.
    pub product_name: String,
    pub points_cost: i64,
    /// Balance the redeeming user was left with.
    pub points_balance_after: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Expanded relations, present on some admin listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}
