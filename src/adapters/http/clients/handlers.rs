//! HTTP handlers for client records.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{self, ErrorResponse};
use crate::domain::garage::{Client, ClientId};
use crate::ports::ClientRepository;

use super::dto::{ClientListResponse, ClientResponse, CreateClientRequest};

#[derive(Clone)]
pub struct ClientHandlers {
    clients: Arc<dyn ClientRepository>,
}

impl ClientHandlers {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }
}

/// GET /clients
pub async fn list(State(handlers): State<ClientHandlers>) -> Response {
    match handlers.clients.list().await {
        Ok(clients) => (
            StatusCode::OK,
            Json(ClientListResponse {
                clients: clients.into_iter().map(ClientResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => error::repository_error(e),
    }
}

/// GET /clients/:id
pub async fn find(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ClientId>,
) -> Response {
    match handlers.clients.find(id).await {
        Ok(Some(client)) => (StatusCode::OK, Json(ClientResponse::from(client))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!("Client not found: {id}"))),
        )
            .into_response(),
        Err(e) => error::repository_error(e),
    }
}

/// POST /clients
pub async fn create(
    State(handlers): State<ClientHandlers>,
    Json(req): Json<CreateClientRequest>,
) -> Response {
    if req.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Name is required")),
        )
            .into_response();
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid email address")),
        )
            .into_response();
    }
    if req.phone_number.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Phone number is required")),
        )
            .into_response();
    }

    let client = Client::new(req.name, req.email, req.phone_number);
    if let Err(e) = handlers.clients.save(&client).await {
        return error::repository_error(e);
    }

    tracing::info!(client_id = %client.id, "client registered");
    (StatusCode::CREATED, Json(ClientResponse::from(client))).into_response()
}

/// DELETE /clients/:id
pub async fn delete(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ClientId>,
) -> Response {
    match handlers.clients.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error::repository_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClientRepository;

    fn handlers() -> ClientHandlers {
        ClientHandlers::new(Arc::new(InMemoryClientRepository::new()))
    }

    fn request(name: &str, email: &str, phone: &str) -> CreateClientRequest {
        CreateClientRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trips() {
        let handlers = handlers();
        let response = create(
            State(handlers.clone()),
            Json(request("Ana Pop", "ana@example.com", "+40 721 000 111")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let clients = handlers.clients.list().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Ana Pop");
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let response = create(
            State(handlers()),
            Json(request("  ", "ana@example.com", "+40 721 000 111")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_bad_email() {
        let response = create(
            State(handlers()),
            Json(request("Ana Pop", "not-an-email", "+40 721 000 111")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn find_unknown_client_is_404() {
        let response = find(State(handlers()), Path(ClientId::new())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_unknown_client_is_404() {
        let response = delete(State(handlers()), Path(ClientId::new())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
