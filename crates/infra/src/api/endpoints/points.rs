//! Points endpoints

use std::sync::Arc;

use awsomeshop_domain::{Result, TransactionsPage};
use serde::Deserialize;

use crate::api::ApiClient;

#[derive(Deserialize)]
struct BalanceEnvelope {
    balance: i64,
}

/// `/points` operations.
pub struct PointsApi {
    api: Arc<ApiClient>,
}

impl PointsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// GET `/points/balance`.
    pub async fn balance(&self) -> Result<i64> {
        let envelope: BalanceEnvelope = self.api.get("/points/balance").await?;
        Ok(envelope.balance)
    }

    /// GET `/points/transactions?page&page_size`.
    ///
    /// The response is the page itself, not an envelope.
    pub async fn transactions(&self, page: u32, page_size: u32) -> Result<TransactionsPage> {
        self.api
            .get_query(
                "/points/transactions",
                &[("page", page.to_string()), ("page_size", page_size.to_string())],
            )
            .await
    }
}
