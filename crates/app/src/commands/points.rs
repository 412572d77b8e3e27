//! Points balance and history

use awsomeshop_domain::{Result, TransactionsPage};

use super::notify_failure;
use crate::context::AppContext;

/// Current balance from the backend.
pub async fn balance(ctx: &AppContext) -> Result<i64> {
    match ctx.points.balance().await {
        Ok(balance) => Ok(balance),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// One page of the transaction ledger.
pub async fn transactions(ctx: &AppContext, page: u32, page_size: u32) -> Result<TransactionsPage> {
    match ctx.points.transactions(page, page_size).await {
        Ok(page) => Ok(page),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}
