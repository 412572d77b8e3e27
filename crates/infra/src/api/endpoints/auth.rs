//! Authentication endpoints

use std::sync::Arc;

use awsomeshop_core::SessionStore;
use awsomeshop_domain::{Result, User};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::ApiClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

/// `/auth/*` operations.
pub struct AuthApi {
    api: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
}

impl AuthApi {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// POST `/auth/login`.
    ///
    /// On success the token and user snapshot are written to the session
    /// store as one combined operation before the response is returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response: LoginResponse =
            self.api.post("/auth/login", &LoginRequest { email, password }).await?;

        self.store.set_session(&response.token, &response.user);
        debug!(user_id = response.user.id, "login succeeded");
        Ok(response)
    }

    /// POST `/auth/logout`.
    ///
    /// The backend call is best-effort: the session store is cleared
    /// whether or not the call goes through, and the original error (if
    /// any) is still returned.
    pub async fn logout(&self) -> Result<()> {
        let result = self.api.post::<_, IgnoredAny>("/auth/logout", &serde_json::json!({})).await;
        self.store.clear();

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(error = %err, "logout call failed, session cleared anyway");
                Err(err)
            }
        }
    }

    /// GET `/auth/me`.
    pub async fn me(&self) -> Result<User> {
        let envelope: UserEnvelope = self.api.get("/auth/me").await?;
        Ok(envelope.user)
    }
}

#[cfg(test)]
mod tests {
    use awsomeshop_core::{Navigator, Route};
    use awsomeshop_domain::ApiConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::store::MemorySessionStore;

    struct NullNavigator;

    impl Navigator for NullNavigator {
        fn force_navigate(&self, _route: Route) {}
    }

    fn harness(server: &MockServer) -> (AuthApi, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        let config = ApiConfig { base_url: server.uri(), timeout_ms: 5_000 };
        let api = Arc::new(
            ApiClient::new(&config, store.clone(), Arc::new(NullNavigator)).unwrap(),
        );
        (AuthApi::new(api, store.clone()), store)
    }

    fn user_json(role: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "full_name": "Li Wei",
            "email": "li.wei@example.com",
            "phone": "13800000000",
            "role": role,
            "points_balance": 120,
            "is_first_login": false,
            "is_active": true,
            "preferred_language": "zh",
            "created_at": "2025-01-05T08:00:00Z",
            "updated_at": "2025-06-01T08:00:00Z"
        })
    }

    #[tokio::test]
    async fn login_stores_token_and_user_together() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(
                serde_json::json!({"email": "li.wei@example.com", "password": "secret"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"token": "tok-1", "user": user_json("employee")}),
            ))
            .mount(&server)
            .await;

        let (auth, store) = harness(&server);
        let response = auth.login("li.wei@example.com", "secret").await.unwrap();

        assert_eq!(response.token, "tok-1");
        assert_eq!(store.token(), Some("tok-1".to_string()));
        assert_eq!(store.user().unwrap().id, 7);
    }

    #[tokio::test]
    async fn failed_login_leaves_store_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(serde_json::json!({"error": "invalid credentials"})),
            )
            .mount(&server)
            .await;

        let (auth, store) = harness(&server);
        let result = auth.login("li.wei@example.com", "wrong").await;

        assert!(result.is_err());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[tokio::test]
    async fn logout_clears_store_even_when_backend_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (auth, store) = harness(&server);
        store.set_session("tok-1", &serde_json::from_value(user_json("employee")).unwrap());

        let result = auth.logout().await;
        assert!(result.is_err());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[tokio::test]
    async fn me_unwraps_the_user_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"user": user_json("admin")})),
            )
            .mount(&server)
            .await;

        let (auth, _store) = harness(&server);
        let user = auth.me().await.unwrap();
        assert!(user.is_admin());
    }
}
