//! HTTP adapter - the dashboard's entire surface.
//!
//! Feature modules own their routes and handler state; this module wires
//! them into one router behind the route guard.

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod documents;
pub mod error;
pub mod invoices;
pub mod middleware;
pub mod notifications;
pub mod vehicles;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};

use crate::application::{SessionManager, ToastNotifier};
use crate::ports::{
    AppointmentRepository, AuthGateway, ClientRepository, DocumentRepository, VehicleRepository,
};

use middleware::{route_guard, unmatched_path, GuardState};

/// Everything the router needs, wired once at startup.
#[derive(Clone)]
pub struct AppDeps {
    pub manager: Arc<SessionManager>,
    pub gateway: Arc<dyn AuthGateway>,
    pub notifier: ToastNotifier,
    pub clients: Arc<dyn ClientRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub documents: Arc<dyn DocumentRepository>,
}

/// GET / - the landing view.
///
/// Signed in it forwards to the dashboard; signed out it describes the
/// sign-in surface. This is the root the guard redirects anonymous
/// requests to, so it must never redirect anonymously itself.
async fn root(State(manager): State<GuardState>) -> Response {
    if manager.current_session().await.is_authenticated() {
        Redirect::to("/dashboard").into_response()
    } else {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "name": "garage-desk",
                "sign_in": "/auth/login",
                "register": "/auth/register",
            })),
        )
            .into_response()
    }
}

/// GET /healthz
async fn healthz() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

/// Assembles the full application router.
pub fn app_router(deps: AppDeps) -> Router {
    let guard_state: GuardState = deps.manager.clone();

    let auth_handlers =
        auth::AuthHandlers::new(deps.manager.clone(), deps.gateway, deps.notifier.clone());
    let client_handlers = clients::ClientHandlers::new(deps.clients.clone());
    let vehicle_handlers =
        vehicles::VehicleHandlers::new(deps.vehicles.clone(), deps.clients.clone());
    let appointment_handlers = appointments::AppointmentHandlers::new(
        deps.appointments.clone(),
        deps.clients.clone(),
        deps.vehicles.clone(),
    );
    let dashboard_handlers =
        dashboard::DashboardHandlers::new(deps.appointments, deps.clients, deps.vehicles);
    let document_handlers = documents::DocumentHandlers::new(deps.documents);

    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .fallback(unmatched_path)
        .with_state(guard_state.clone())
        .nest("/auth", auth::router(auth_handlers))
        .nest("/clients", clients::router(client_handlers))
        .nest("/vehicles", vehicles::router(vehicle_handlers))
        .nest("/appointments", appointments::router(appointment_handlers))
        .nest("/dashboard", dashboard::router(dashboard_handlers))
        .nest("/invoices", invoices::router())
        .nest("/documents", documents::router(document_handlers))
        .nest("/notifications", notifications::router(deps.notifier))
        .layer(from_fn_with_state(guard_state, route_guard))
}
