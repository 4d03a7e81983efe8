//! DTOs for the payments panel and its CSV export.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::transaction::{PaymentMethod, Transaction};

#[derive(Debug, Serialize, PartialEq)]
pub struct MethodTotal {
    pub method: PaymentMethod,
    pub label: &'static str,
    pub count: usize,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct PaymentsPageData {
    pub query: String,
    /// `None` when every method is shown.
    pub method: Option<String>,
    pub transactions: Vec<Transaction>,
    /// Revenue of the filtered transactions.
    pub total_revenue: f64,
    pub method_totals: Vec<MethodTotal>,
}

/// Flat row written to the transactions CSV export.
#[derive(Debug, Serialize)]
pub struct TransactionCsvRow<'a> {
    pub id: &'a str,
    pub date: NaiveDate,
    pub client: &'a str,
    pub service: &'a str,
    pub amount: f64,
    pub method: &'static str,
    pub status: String,
}

impl<'a> From<&'a Transaction> for TransactionCsvRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            id: transaction.id.as_str(),
            date: transaction.date,
            client: transaction.client.as_str(),
            service: transaction.service.as_str(),
            amount: transaction.amount,
            method: transaction.method.label(),
            status: transaction.status.to_string(),
        }
    }
}
