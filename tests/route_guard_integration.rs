//! Integration tests for the route guard over the full router.
//!
//! Drives the assembled application with in-process requests and checks
//! which of the two route trees each session state can reach, including the
//! asymmetric unknown-path policy and cold-start hydration from disk.

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

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    manager: Arc<SessionManager>,
    data_dir: TempDir,
}

async fn build_app() -> TestApp {
    let data_dir = TempDir::new().unwrap();
    build_app_in(data_dir).await
}

async fn build_app_in(data_dir: TempDir) -> TestApp {
    let store = Arc::new(FileSessionStore::new(data_dir.path()));
    let manager = Arc::new(SessionManager::hydrate(store, false).await);

    let gateway = MockAuthGateway::new().with_account(
        "desk@garage.test",
        "hunter2",
        AuthPayload {
            user: User::with_email("desk@garage.test", Role::Admin),
            token: Some("remember-me".to_string()),
        },
    );

    let deps = AppDeps {
        manager: manager.clone(),
        gateway: Arc::new(gateway),
        notifier: ToastNotifier::new(),
        clients: Arc::new(InMemoryClientRepository::new()),
        vehicles: Arc::new(InMemoryVehicleRepository::new()),
        appointments: Arc::new(InMemoryAppointmentRepository::new()),
        documents: Arc::new(InMemoryDocumentRepository::new()),
    };

    TestApp {
        router: app_router(deps),
        manager,
        data_dir,
    }
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn sign_in(app: &TestApp) {
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
}

// =============================================================================
// Cold start (no persisted session)
// =============================================================================

#[tokio::test]
async fn fresh_start_lands_on_the_sign_in_view() {
    let app = build_app().await;

    let response = app.router.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["sign_in"], "/auth/login");
}

#[tokio::test]
async fn anonymous_request_to_protected_path_redirects_to_root() {
    let app = build_app().await;

    for path in ["/dashboard", "/clients", "/vehicles", "/appointments"] {
        let response = app.router.clone().oneshot(get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }
}

#[tokio::test]
async fn anonymous_request_to_unknown_path_also_redirects() {
    let app = build_app().await;

    let response = app.router.clone().oneshot(get("/no-such-page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn health_check_needs_no_session() {
    let app = build_app().await;

    let response = app.router.clone().oneshot(get("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Signed-in tree
// =============================================================================

#[tokio::test]
async fn sign_in_unlocks_the_authenticated_tree() {
    let app = build_app().await;
    sign_in(&app).await;

    for path in ["/dashboard", "/clients", "/vehicles", "/appointments", "/documents"] {
        let response = app.router.clone().oneshot(get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn signed_in_root_forwards_to_the_dashboard() {
    let app = build_app().await;
    sign_in(&app).await;

    let response = app.router.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/dashboard"
    );
}

#[tokio::test]
async fn authenticated_unknown_path_is_not_found_without_redirect() {
    let app = build_app().await;
    sign_in(&app).await;

    let response = app.router.clone().oneshot(get("/no-such-page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
}

// =============================================================================
// Restart / rehydration
// =============================================================================

#[tokio::test]
async fn persisted_session_survives_a_restart() {
    let data_dir = TempDir::new().unwrap();

    let app = build_app_in(data_dir).await;
    sign_in(&app).await;
    assert!(app.manager.current_session().await.is_authenticated());

    // "Restart": rebuild the whole stack over the same data directory.
    let app = build_app_in(app.data_dir).await;
    assert!(app.manager.current_session().await.is_authenticated());

    let response = app.router.clone().oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn corrupted_session_slot_starts_signed_out() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("session.json"), "{not json").unwrap();

    let app = build_app_in(data_dir).await;
    assert!(!app.manager.current_session().await.is_authenticated());

    let response = app.router.clone().oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// =============================================================================
// Sign-out
// =============================================================================

#[tokio::test]
async fn sign_out_redirects_to_root_and_locks_the_tree() {
    let app = build_app().await;
    sign_in(&app).await;

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

    let response = app.router.clone().oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn sign_out_clears_the_persisted_slot() {
    let app = build_app().await;
    sign_in(&app).await;

    app.router
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

    let store = FileSessionStore::new(app.data_dir.path());
    assert!(!store.load().await.is_authenticated());
    assert!(store.load_token().await.is_none());
}
