//! Session persistence across process restarts.

use awsomeshop_app::commands::auth;
use awsomeshop_app::AppContext;
use awsomeshop_core::Route;
use awsomeshop_domain::{ApiConfig, Config, SessionConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn employee_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "full_name": "Li Wei",
        "email": "li.wei@example.com",
        "phone": "13800000000",
        "role": "employee",
        "points_balance": 120,
        "is_first_login": false,
        "is_active": true,
        "preferred_language": "zh",
        "created_at": "2025-01-05T08:00:00Z",
        "updated_at": "2025-06-01T08:00:00Z"
    })
}

#[tokio::test]
async fn session_survives_a_restart_without_a_backend_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-1",
            "user": employee_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        api: ApiConfig { base_url: server.uri(), timeout_ms: 5_000 },
        session: SessionConfig { path: dir.path().join("session.json") },
        ..Config::default()
    };

    // First run: sign in, session lands on disk.
    {
        let ctx = AppContext::new(config.clone()).unwrap();
        auth::login(&ctx, "li.wei@example.com", "secret").await.unwrap();
        assert!(ctx.session.is_authenticated());
    }

    // Second run: hydrated purely from the session document.
    let ctx = AppContext::new(config).unwrap();
    assert!(ctx.session.is_authenticated());
    assert_eq!(ctx.session.user().unwrap().points_balance, 120);
    assert_eq!(ctx.navigation.current(), Route::Products);

    // Exactly one login request ever went out.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
