//! Invoice generation.
//!
//! Invoices are computed, never stored: the operator fills in line items and
//! the service derives per-line totals and the grand total.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::GarageError;

/// One line item on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl InvoiceLine {
    pub fn total_price(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// A draft invoice as submitted by the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer_name: String,
    pub date: NaiveDate,
    pub po_number: String,
    pub lines: Vec<InvoiceLine>,
}

impl Invoice {
    /// Validates the draft the way the original entry form does: customer
    /// name and PO number are required, quantities start at 1, prices are
    /// non-negative.
    pub fn validate(&self) -> Result<(), GarageError> {
        if self.customer_name.trim().is_empty() {
            return Err(GarageError::validation("customer_name", "required"));
        }
        if self.po_number.trim().is_empty() {
            return Err(GarageError::validation("po_number", "required"));
        }
        for (index, line) in self.lines.iter().enumerate() {
            if line.description.trim().is_empty() {
                return Err(GarageError::validation(
                    format!("lines[{index}].description"),
                    "required",
                ));
            }
            if line.quantity < 1 {
                return Err(GarageError::validation(
                    format!("lines[{index}].quantity"),
                    "must be at least 1",
                ));
            }
            if line.unit_price < 0.0 {
                return Err(GarageError::validation(
                    format!("lines[{index}].unit_price"),
                    "must be positive",
                ));
            }
        }
        Ok(())
    }

    pub fn total_amount(&self) -> f64 {
        self.lines.iter().map(InvoiceLine::total_price).sum()
    }
}
