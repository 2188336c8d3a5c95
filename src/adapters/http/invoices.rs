//! Invoice HTTP feature.
//!
//! Generation is pure computation: the draft comes in, per-line totals and
//! the grand total come back. Nothing is stored.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::error;
use crate::domain::garage::{Invoice, InvoiceLine};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub customer_name: String,
    pub date: NaiveDate,
    pub po_number: String,
    pub lines: Vec<InvoiceLineRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceLineRequest {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedInvoiceResponse {
    pub customer_name: String,
    pub date: NaiveDate,
    pub po_number: String,
    pub lines: Vec<GeneratedLineResponse>,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLineResponse {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// POST /invoices/generate
pub async fn generate(Json(req): Json<GenerateInvoiceRequest>) -> Response {
    let invoice = Invoice {
        customer_name: req.customer_name,
        date: req.date,
        po_number: req.po_number,
        lines: req
            .lines
            .into_iter()
            .map(|line| InvoiceLine {
                description: line.description,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect(),
    };

    if let Err(e) = invoice.validate() {
        return error::garage_error(e);
    }

    let total_amount = invoice.total_amount();
    let response = GeneratedInvoiceResponse {
        customer_name: invoice.customer_name,
        date: invoice.date,
        po_number: invoice.po_number,
        lines: invoice
            .lines
            .into_iter()
            .map(|line| {
                let total_price = line.total_price();
                GeneratedLineResponse {
                    description: line.description,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    total_price,
                }
            })
            .collect(),
        total_amount,
    };

    (StatusCode::OK, Json(response)).into_response()
}

pub fn router() -> Router {
    Router::new().route("/generate", post(generate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> GenerateInvoiceRequest {
        GenerateInvoiceRequest {
            customer_name: "Ana Pop".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            po_number: "PO-1001".to_string(),
            lines: vec![
                InvoiceLineRequest {
                    description: "Oil change".to_string(),
                    quantity: 2,
                    unit_price: 150.0,
                },
                InvoiceLineRequest {
                    description: "Wipers".to_string(),
                    quantity: 1,
                    unit_price: 45.5,
                },
            ],
        }
    }

    #[tokio::test]
    async fn generate_computes_line_and_grand_totals() {
        let response = generate(Json(draft())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn generate_rejects_blank_customer() {
        let mut req = draft();
        req.customer_name = " ".to_string();
        let response = generate(Json(req)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_rejects_zero_quantity() {
        let mut req = draft();
        req.lines[0].quantity = 0;
        let response = generate(Json(req)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
