//! Garage Desk server binary.
//!
//! Wires the file-backed session store, the upstream auth gateway, the
//! in-memory record repositories, and the HTTP router, then serves until
//! interrupted.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use garage_desk::adapters::auth::GarageApiGateway;
use garage_desk::adapters::http::{app_router, AppDeps};
use garage_desk::adapters::memory::{
    InMemoryAppointmentRepository, InMemoryClientRepository, InMemoryDocumentRepository,
    InMemoryVehicleRepository,
};
use garage_desk::adapters::storage::FileSessionStore;
use garage_desk::application::{SessionManager, ToastNotifier};
use garage_desk::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.server.log_level)
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Arc::new(FileSessionStore::new(config.storage.data_path()));
    let manager = Arc::new(
        SessionManager::hydrate(store, config.auth.persist_session_on_sign_up).await,
    );
    let gateway = Arc::new(GarageApiGateway::new(config.auth.api_base_url.clone()));

    let deps = AppDeps {
        manager,
        gateway,
        notifier: ToastNotifier::new(),
        clients: Arc::new(InMemoryClientRepository::new()),
        vehicles: Arc::new(InMemoryVehicleRepository::new()),
        appointments: Arc::new(InMemoryAppointmentRepository::new()),
        documents: Arc::new(InMemoryDocumentRepository::new()),
    };

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::new()
    } else {
        let origins: Vec<_> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = app_router(deps)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "garage-desk listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
