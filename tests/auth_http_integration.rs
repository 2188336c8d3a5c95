//! Integration tests for the auth endpoints over the full router.
//!
//! Exercises the sign-in/sign-up/sign-out flows end to end: gateway calls,
//! session adoption, the persisted slot on disk, and the remember-me token.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use garage_desk::adapters::auth::MockAuthGateway;
use garage_desk::adapters::http::{app_router, AppDeps};
use garage_desk::adapters::memory::{
    InMemoryAppointmentRepository, InMemoryClientRepository, InMemoryDocumentRepository,
    InMemoryVehicleRepository,
};
use garage_desk::adapters::storage::FileSessionStore;
use garage_desk::application::{SessionManager, ToastNotifier};
use garage_desk::domain::session::{Role, User};
use garage_desk::ports::{AuthPayload, SessionStore};

struct TestApp {
    router: Router,
    data_dir: TempDir,
}

async fn build_app(persist_on_sign_up: bool) -> TestApp {
    let data_dir = TempDir::new().unwrap();
    let store = Arc::new(FileSessionStore::new(data_dir.path()));
    let manager = Arc::new(SessionManager::hydrate(store, persist_on_sign_up).await);

    let gateway = MockAuthGateway::new().with_account(
        "desk@garage.test",
        "hunter2",
        AuthPayload {
            user: User::with_email("desk@garage.test", Role::Admin)
                .with_name("Desk Operator"),
            token: Some("remember-me".to_string()),
        },
    );

    let deps = AppDeps {
        manager,
        gateway: Arc::new(gateway),
        notifier: ToastNotifier::new(),
        clients: Arc::new(InMemoryClientRepository::new()),
        vehicles: Arc::new(InMemoryVehicleRepository::new()),
        appointments: Arc::new(InMemoryAppointmentRepository::new()),
        documents: Arc::new(InMemoryDocumentRepository::new()),
    };

    TestApp {
        router: app_router(deps),
        data_dir,
    }
}

fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn slot_store(app: &TestApp) -> FileSessionStore {
    FileSessionStore::new(app.data_dir.path())
}

// =============================================================================
// Sign-in
// =============================================================================

#[tokio::test]
async fn successful_sign_in_returns_the_session_and_persists_it() {
    let app = build_app(false).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({
                "email": "desk@garage.test",
                "password": "hunter2",
                "remember_me": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "desk@garage.test");
    assert_eq!(json["user"]["name"], "Desk Operator");

    let store = slot_store(&app);
    assert!(store.load().await.is_authenticated());
    assert_eq!(store.load_token().await.as_deref(), Some("remember-me"));
}

#[tokio::test]
async fn sign_in_without_remember_me_keeps_token_off_disk() {
    let app = build_app(false).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({"email": "desk@garage.test", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let store = slot_store(&app);
    assert!(store.load().await.is_authenticated());
    assert!(store.load_token().await.is_none());
}

#[tokio::test]
async fn invalid_credentials_are_rejected_and_nothing_persists() {
    let app = build_app(false).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({"email": "desk@garage.test", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid email or password");

    assert!(!slot_store(&app).load().await.is_authenticated());
}

#[tokio::test]
async fn malformed_email_is_rejected_without_a_gateway_call() {
    let app = build_app(false).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({"email": "nope", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Sign-up
// =============================================================================

#[tokio::test]
async fn sign_up_adopts_the_session_in_memory_only_by_default() {
    let app = build_app(false).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/auth/register",
            serde_json::json!({
                "name": "New Operator",
                "email": "new@garage.test",
                "password": "hunter2",
                "role": "mechanic"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "new@garage.test");

    // The session endpoint sees the signed-in user...
    let response = app.router.clone().oneshot(get("/auth/session")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "new@garage.test");

    // ...but the slot on disk stays empty.
    assert!(!slot_store(&app).load().await.is_authenticated());
}

#[tokio::test]
async fn sign_up_persists_when_configured_to() {
    let app = build_app(true).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/auth/register",
            serde_json::json!({
                "name": "New Operator",
                "email": "new@garage.test",
                "password": "hunter2"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    assert!(slot_store(&app).load().await.is_authenticated());
}

// =============================================================================
// Session probe and sign-out
// =============================================================================

#[tokio::test]
async fn session_probe_reports_null_user_when_signed_out() {
    let app = build_app(false).await;

    let response = app.router.clone().oneshot(get("/auth/session")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["user"].is_null());
}

#[tokio::test]
async fn sign_out_clears_session_and_token_and_redirects() {
    let app = build_app(false).await;

    app.router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({
                "email": "desk@garage.test",
                "password": "hunter2",
                "remember_me": true
            }),
        ))
        .await
        .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let store = slot_store(&app);
    assert!(!store.load().await.is_authenticated());
    assert!(store.load_token().await.is_none());
}

// =============================================================================
// Toast slot wiring
// =============================================================================

#[tokio::test]
async fn failed_sign_in_leaves_an_error_toast() {
    let app = build_app(false).await;

    app.router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({"email": "desk@garage.test", "password": "wrong"}),
        ))
        .await
        .unwrap();

    let response = app.router.clone().oneshot(get("/notifications")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Invalid email or password");
    assert_eq!(json["toast"]["severity"], "error");
}

#[tokio::test]
async fn a_later_toast_replaces_the_earlier_one() {
    let app = build_app(false).await;

    // Failed sign-in, then a successful one: only the second toast remains.
    app.router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({"email": "desk@garage.test", "password": "wrong"}),
        ))
        .await
        .unwrap();
    app.router
        .clone()
        .oneshot(post_json(
            "/auth/login",
            serde_json::json!({"email": "desk@garage.test", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    let response = app.router.clone().oneshot(get("/notifications")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Signed in");
    assert_eq!(json["toast"]["severity"], "success");
}
