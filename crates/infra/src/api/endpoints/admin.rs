//! Administration endpoints
//!
//! Grouped by resource the way the admin console is: user management,
//! product management, points management, order management, reports.
//! Batch operations take a markdown table as an opaque string; its format
//! is owned and parsed by the backend. None of these calls retry — the
//! batch operations are idempotent server-side and safe to re-invoke
//! manually after a failure.

use std::sync::Arc;

use awsomeshop_domain::{
    OrderStatus, PointsBalanceStats, PointsGrantStats, Product, ProductStatus, RedemptionOrder,
    RedemptionStats, Result, User,
};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;

/// Payload for creating an employee account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEmployeeRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub points_required: i64,
    pub stock_quantity: i64,
}

/// Partial product update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_required: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
}

/// Payload for a single grant or deduction.
#[derive(Debug, Clone, Serialize)]
pub struct PointsAdjustment {
    pub user_id: i64,
    pub amount: i64,
    pub reason: String,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct ProductEnvelope {
    product: Product,
}

#[derive(Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<RedemptionOrder>,
}

#[derive(Deserialize)]
struct GrantsEnvelope {
    grants: Vec<PointsGrantStats>,
}

#[derive(Deserialize)]
struct BalancesEnvelope {
    balances: Vec<PointsBalanceStats>,
}

#[derive(Deserialize)]
struct RedemptionsEnvelope {
    redemptions: Vec<RedemptionStats>,
}

/// `/admin/*` operations, grouped per resource.
pub struct AdminApi {
    pub users: AdminUsersApi,
    pub products: AdminProductsApi,
    pub points: AdminPointsApi,
    pub orders: AdminOrdersApi,
    pub reports: AdminReportsApi,
}

impl AdminApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            users: AdminUsersApi { api: api.clone() },
            products: AdminProductsApi { api: api.clone() },
            points: AdminPointsApi { api: api.clone() },
            orders: AdminOrdersApi { api: api.clone() },
            reports: AdminReportsApi { api },
        }
    }
}

/// `/admin/users` operations.
pub struct AdminUsersApi {
    api: Arc<ApiClient>,
}

impl AdminUsersApi {
    /// POST `/admin/users`.
    pub async fn create(&self, request: &CreateEmployeeRequest) -> Result<User> {
        let envelope: UserEnvelope = self.api.post("/admin/users", request).await?;
        Ok(envelope.user)
    }

    /// GET `/admin/users`, optionally filtered by active flag.
    pub async fn list(&self, is_active: Option<bool>) -> Result<Vec<User>> {
        let mut query = Vec::new();
        if let Some(is_active) = is_active {
            query.push(("is_active", is_active.to_string()));
        }
        let envelope: UsersEnvelope = self.api.get_query("/admin/users", &query).await?;
        Ok(envelope.users)
    }

    /// PUT `/admin/users/:id/status`.
    pub async fn set_status(&self, user_id: i64, is_active: bool) -> Result<()> {
        self.api
            .put::<_, IgnoredAny>(
                &format!("/admin/users/{user_id}/status"),
                &serde_json::json!({ "is_active": is_active }),
            )
            .await?;
        Ok(())
    }
}

/// `/admin/products` operations.
pub struct AdminProductsApi {
    api: Arc<ApiClient>,
}

impl AdminProductsApi {
    /// POST `/admin/products`.
    pub async fn create(&self, request: &CreateProductRequest) -> Result<Product> {
        let envelope: ProductEnvelope = self.api.post("/admin/products", request).await?;
        Ok(envelope.product)
    }

    /// PUT `/admin/products/:id`.
    pub async fn update(&self, product_id: i64, request: &UpdateProductRequest) -> Result<Product> {
        let envelope: ProductEnvelope =
            self.api.put(&format!("/admin/products/{product_id}"), request).await?;
        Ok(envelope.product)
    }

    /// PUT `/admin/products/:id/status`.
    pub async fn set_status(&self, product_id: i64, status: ProductStatus) -> Result<()> {
        self.api
            .put::<_, IgnoredAny>(
                &format!("/admin/products/{product_id}/status"),
                &serde_json::json!({ "status": status.as_str() }),
            )
            .await?;
        Ok(())
    }

    /// POST `/admin/products/batch` — bulk import from a markdown table.
    pub async fn batch_import(&self, markdown: &str) -> Result<Vec<Product>> {
        let envelope: ProductsEnvelope = self
            .api
            .post("/admin/products/batch", &serde_json::json!({ "markdown": markdown }))
            .await?;
        Ok(envelope.products)
    }

    /// GET `/admin/products`, optionally filtered by status.
    pub async fn list(&self, status: Option<ProductStatus>) -> Result<Vec<Product>> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        let envelope: ProductsEnvelope = self.api.get_query("/admin/products", &query).await?;
        Ok(envelope.products)
    }
}

/// `/admin/points` operations.
pub struct AdminPointsApi {
    api: Arc<ApiClient>,
}

impl AdminPointsApi {
    /// POST `/admin/points/grant`.
    pub async fn grant(&self, request: &PointsAdjustment) -> Result<()> {
        self.api.post::<_, IgnoredAny>("/admin/points/grant", request).await?;
        Ok(())
    }

    /// POST `/admin/points/deduct`.
    pub async fn deduct(&self, request: &PointsAdjustment) -> Result<()> {
        self.api.post::<_, IgnoredAny>("/admin/points/deduct", request).await?;
        Ok(())
    }

    /// POST `/admin/points/batch-grant` — bulk grants from a markdown table.
    pub async fn batch_grant(&self, markdown: &str) -> Result<()> {
        self.api
            .post::<_, IgnoredAny>(
                "/admin/points/batch-grant",
                &serde_json::json!({ "markdown": markdown }),
            )
            .await?;
        Ok(())
    }
}

/// `/admin/orders` operations.
pub struct AdminOrdersApi {
    api: Arc<ApiClient>,
}

impl AdminOrdersApi {
    /// GET `/admin/orders`, optionally filtered by status and user.
    pub async fn list(
        &self,
        status: Option<OrderStatus>,
        user_id: Option<i64>,
    ) -> Result<Vec<RedemptionOrder>> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(user_id) = user_id {
            query.push(("user_id", user_id.to_string()));
        }
        let envelope: OrdersEnvelope = self.api.get_query("/admin/orders", &query).await?;
        Ok(envelope.orders)
    }

    /// PUT `/admin/orders/batch-status`.
    ///
    /// `order_numbers` is one backend-parsed string holding many order
    /// numbers.
    pub async fn batch_update_status(
        &self,
        order_numbers: &str,
        status: OrderStatus,
    ) -> Result<()> {
        self.api
            .put::<_, IgnoredAny>(
                "/admin/orders/batch-status",
                &serde_json::json!({
                    "order_numbers": order_numbers,
                    "status": status.as_str(),
                }),
            )
            .await?;
        Ok(())
    }
}

/// `/admin/reports` operations.
pub struct AdminReportsApi {
    api: Arc<ApiClient>,
}

impl AdminReportsApi {
    /// GET `/admin/reports/points-grants`.
    pub async fn points_grants(&self) -> Result<Vec<PointsGrantStats>> {
        let envelope: GrantsEnvelope = self.api.get("/admin/reports/points-grants").await?;
        Ok(envelope.grants)
    }

    /// GET `/admin/reports/points-balances`.
    pub async fn points_balances(&self) -> Result<Vec<PointsBalanceStats>> {
        let envelope: BalancesEnvelope = self.api.get("/admin/reports/points-balances").await?;
        Ok(envelope.balances)
    }

    /// GET `/admin/reports/redemptions`.
    pub async fn redemptions(&self) -> Result<Vec<RedemptionStats>> {
        let envelope: RedemptionsEnvelope = self.api.get("/admin/reports/redemptions").await?;
        Ok(envelope.redemptions)
    }
}

#[cfg(test)]
mod tests {
    use awsomeshop_core::{Navigator, Route};
    use awsomeshop_domain::ApiConfig;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::store::MemorySessionStore;

    struct NullNavigator;

    impl Navigator for NullNavigator {
        fn force_navigate(&self, _route: Route) {}
    }

    fn admin_api(server: &MockServer) -> AdminApi {
        let config = ApiConfig { base_url: server.uri(), timeout_ms: 5_000 };
        let api = Arc::new(
            ApiClient::new(&config, Arc::new(MemorySessionStore::new()), Arc::new(NullNavigator))
                .unwrap(),
        );
        AdminApi::new(api)
    }

    fn user_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "full_name": "Zhang San",
            "email": "zhang.san@example.com",
            "phone": "13700000000",
            "role": "employee",
            "points_balance": 0,
            "is_first_login": true,
            "is_active": true,
            "preferred_language": "zh",
            "created_at": "2025-06-01T00:00:00Z",
            "updated_at": "2025-06-01T00:00:00Z"
        })
    }

    fn product_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": "Mug",
            "image_url": null,
            "points_required": 30,
            "stock_quantity": 5,
            "status": "active",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn create_user_unwraps_envelope_with_extra_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"user": user_json(9), "message": "created"}),
            ))
            .mount(&server)
            .await;

        let request = CreateEmployeeRequest {
            full_name: "Zhang San".into(),
            email: "zhang.san@example.com".into(),
            phone: "13700000000".into(),
        };
        let user = admin_api(&server).users.create(&request).await.unwrap();
        assert_eq!(user.id, 9);
    }

    #[tokio::test]
    async fn user_list_filter_reaches_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .and(query_param("is_active", "true"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"users": [user_json(9)]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let users = admin_api(&server).users.list(Some(true)).await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn batch_import_passes_markdown_through_verbatim() {
        let server = MockServer::start().await;
        let markdown = "| name | points | stock |\n| --- | --- | --- |\n| Mug | 30 | 5 |";
        Mock::given(method("POST"))
            .and(path("/admin/products/batch"))
            .and(body_json(serde_json::json!({ "markdown": markdown })))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"products": [product_json(1)], "count": 1, "message": "ok"}),
            ))
            .mount(&server)
            .await;

        let products = admin_api(&server).products.batch_import(markdown).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn order_batch_status_sends_numbers_and_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/admin/orders/batch-status"))
            .and(body_json(serde_json::json!({
                "order_numbers": "RD-1\nRD-2",
                "status": "delivered"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        admin_api(&server)
            .orders
            .batch_update_status("RD-1\nRD-2", OrderStatus::Delivered)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn reports_unwrap_their_envelopes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/reports/points-balances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "balances": [
                    {"user_name": "Li Wei", "user_email": "li.wei@example.com", "points_balance": 90}
                ]
            })))
            .mount(&server)
            .await;

        let balances = admin_api(&server).reports.points_balances().await.unwrap();
        assert_eq!(balances[0].points_balance, 90);
    }
}
