//! Catalog product types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product visibility status, backend-authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    /// Wire representation, as used in query strings and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Catalog product snapshot
///
/// Stock and status are owned by the backend; the client never decrements
/// stock locally, it re-fetches the list after a redemption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub points_required: i64,
    pub stock_quantity: i64,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product can currently be redeemed at all.
    pub fn is_redeemable(&self) -> bool {
        self.status == ProductStatus::Active && self.stock_quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_stock_is_not_redeemable() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Mug",
            "image_url": null,
            "points_required": 30,
            "stock_quantity": 0,
            "status": "active",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(!product.is_redeemable());
    }
}
