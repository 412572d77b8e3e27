//! User profile endpoints

use std::sync::Arc;

use awsomeshop_domain::{Result, User};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;

#[derive(Serialize)]
struct UpdatePhoneRequest<'a> {
    phone: &'a str,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

/// `/users` operations.
pub struct UsersApi {
    api: Arc<ApiClient>,
}

impl UsersApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// GET `/users/profile`.
    pub async fn profile(&self) -> Result<User> {
        let envelope: UserEnvelope = self.api.get("/users/profile").await?;
        Ok(envelope.user)
    }

    /// PUT `/users/phone`.
    pub async fn update_phone(&self, phone: &str) -> Result<()> {
        self.api.put::<_, IgnoredAny>("/users/phone", &UpdatePhoneRequest { phone }).await?;
        Ok(())
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

    fn users_api(server: &MockServer) -> UsersApi {
        let config = ApiConfig { base_url: server.uri(), timeout_ms: 5_000 };
        let api = Arc::new(
            ApiClient::new(&config, Arc::new(MemorySessionStore::new()), Arc::new(NullNavigator))
                .unwrap(),
        );
        UsersApi::new(api)
    }

    #[tokio::test]
    async fn update_phone_puts_the_new_number() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/phone"))
            .and(body_json(serde_json::json!({"phone": "13900000000"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        users_api(&server).update_phone("13900000000").await.unwrap();
    }
}
