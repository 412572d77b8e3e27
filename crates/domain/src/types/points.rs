//! Points ledger types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::redemption::RedemptionOrder;
use super::user::User;

/// Ledger entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Grant,
    Deduct,
    Redemption,
}

/// Append-only points ledger entry; immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsTransaction {
    pub id: i64,
    pub user_id: i64,
    pub transaction_type: TransactionType,
    /// Signed amount; deductions and redemptions are negative.
    pub amount: i64,
    pub balance_after: i64,
    pub reason: String,
    #[serde(default)]
    pub operator_id: Option<i64>,
    #[serde(default)]
    pub related_order_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    /// Expanded relations, present on some listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_order: Option<RedemptionOrder>,
}

/// One page of the transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsPage {
    pub transactions: Vec<PointsTransaction>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}
