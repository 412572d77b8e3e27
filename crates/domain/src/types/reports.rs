//! Admin report row types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the points-grants report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsGrantStats {
    pub user_name: String,
    pub user_email: String,
    pub amount: i64,
    pub reason: String,
    pub operator_name: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the points-balances report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsBalanceStats {
    pub user_name: String,
    pub user_email: String,
    pub points_balance: i64,
}

/// One row of the redemptions report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionStats {
    pub product_name: String,
    pub product_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub points_cost: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
