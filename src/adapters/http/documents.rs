//! Documents HTTP feature - the garage's paper trail.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::{self, ErrorResponse};
use crate::domain::garage::{Document, DocumentId};
use crate::ports::DocumentRepository;

#[derive(Clone)]
pub struct DocumentHandlers {
    documents: Arc<dyn DocumentRepository>,
}

impl DocumentHandlers {
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddDocumentRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub id: String,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id.to_string(),
            name: document.name,
            uploaded_at: document.uploaded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentResponse>,
}

/// GET /documents
pub async fn list(State(handlers): State<DocumentHandlers>) -> Response {
    match handlers.documents.list().await {
        Ok(documents) => (
            StatusCode::OK,
            Json(DocumentListResponse {
                documents: documents.into_iter().map(DocumentResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => error::repository_error(e),
    }
}

/// POST /documents
pub async fn add(
    State(handlers): State<DocumentHandlers>,
    Json(req): Json<AddDocumentRequest>,
) -> Response {
    if req.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Document name is required")),
        )
            .into_response();
    }

    let document = Document::new(req.name);
    if let Err(e) = handlers.documents.save(&document).await {
        return error::repository_error(e);
    }

    (StatusCode::CREATED, Json(DocumentResponse::from(document))).into_response()
}

/// DELETE /documents/:id
pub async fn delete(
    State(handlers): State<DocumentHandlers>,
    Path(id): Path<DocumentId>,
) -> Response {
    match handlers.documents.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error::repository_error(e),
    }
}

pub fn router(handlers: DocumentHandlers) -> Router {
    Router::new()
        .route("/", get(list).post(add))
        .route("/:id", axum::routing::delete(delete))
        .with_state(handlers)
}
