//! Redemption endpoints

use std::sync::Arc;

use awsomeshop_domain::{RedemptionOrder, Result};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;

#[derive(Serialize)]
struct RedeemRequest {
    product_id: i64,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: RedemptionOrder,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<RedemptionOrder>,
}

/// `/redemptions` operations.
pub struct RedemptionsApi {
    api: Arc<ApiClient>,
}

impl RedemptionsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// POST `/redemptions` — exchange points for a product.
    pub async fn redeem(&self, product_id: i64) -> Result<RedemptionOrder> {
        let envelope: OrderEnvelope =
            self.api.post("/redemptions", &RedeemRequest { product_id }).await?;
        Ok(envelope.order)
    }

    /// GET `/redemptions` — the caller's order history.
    pub async fn history(&self) -> Result<Vec<RedemptionOrder>> {
        let envelope: OrdersEnvelope = self.api.get("/redemptions").await?;
        Ok(envelope.orders)
    }

    /// GET `/redemptions/:id`.
    pub async fn get(&self, id: i64) -> Result<RedemptionOrder> {
        let envelope: OrderEnvelope = self.api.get(&format!("/redemptions/{id}")).await?;
        Ok(envelope.order)
    }
}
