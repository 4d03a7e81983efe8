//! Payments panel: transaction filters, revenue totals and exports.

use crate::domain::transaction::{PaymentMethod, Transaction};
use crate::domain::types::TransactionId;
use crate::dto::Notice;
use crate::dto::payments::{MethodTotal, PaymentsPageData};
use crate::repository::TransactionReader;
use crate::search::{filter_records, query_or_empty};
use crate::services::{ServiceError, ServiceResult};
use crate::stats::{count_where, round2, sum_by};

/// Method selector value that disables method filtering.
pub const ALL_METHODS: &str = "all";

/// Normalizes the method selector; `None` means every method.
fn normalize_method(raw: Option<&str>) -> Option<String> {
    raw.map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty() && m != ALL_METHODS)
}

/// Whether the method label contains the lowercased `method` filter.
pub fn method_matches(method: PaymentMethod, filter: Option<&str>) -> bool {
    filter.is_none_or(|needle| method.label().to_lowercase().contains(needle))
}

pub fn method_totals(transactions: &[Transaction]) -> Vec<MethodTotal> {
    PaymentMethod::ALL
        .iter()
        .map(|&method| {
            let total = transactions
                .iter()
                .filter(|t| t.method == method)
                .map(|t| t.amount)
                .sum();
            MethodTotal {
                method,
                label: method.label(),
                count: count_where(transactions, |t| t.method == method),
                total: round2(total),
            }
        })
        .collect()
}

/// Loads the transactions table filtered by text and payment method.
///
/// `method` is `"all"` or any part of a method label (`"cartão"` keeps
/// both card types).
pub fn load_payments<R>(
    repo: &R,
    query: Option<&str>,
    method: Option<&str>,
) -> ServiceResult<PaymentsPageData>
where
    R: TransactionReader + ?Sized,
{
    let query = query_or_empty(query);
    let method = normalize_method(method);

    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to list transactions: {err}");
        err
    })?;

    let transactions: Vec<Transaction> = filter_records(transactions, &query)
        .into_iter()
        .filter(|t| method_matches(t.method, method.as_deref()))
        .collect();

    Ok(PaymentsPageData {
        total_revenue: round2(sum_by(&transactions, |t| t.amount)),
        method_totals: method_totals(&transactions),
        transactions,
        query,
        method,
    })
}

/// Confirms a receipt download for an existing transaction.
pub fn download_receipt<R>(repo: &R, transaction_id: &str) -> ServiceResult<Notice>
where
    R: TransactionReader + ?Sized,
{
    let transaction_id = TransactionId::new(transaction_id)?;

    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to list transactions: {err}");
        err
    })?;

    if !transactions.iter().any(|t| t.id == transaction_id) {
        log::warn!("Receipt requested for unknown transaction {transaction_id}");
        return Err(ServiceError::NotFound);
    }

    Ok(Notice::success(
        "Recibo baixado",
        format!("O recibo #{transaction_id} foi baixado com sucesso."),
    ))
}

/// Writes `transactions` as CSV, returning the number of rows written.
#[cfg(feature = "cli")]
pub fn export_transactions<W>(transactions: &[Transaction], writer: W) -> ServiceResult<usize>
where
    W: std::io::Write,
{
    use crate::dto::payments::TransactionCsvRow;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for transaction in transactions {
        csv_writer
            .serialize(TransactionCsvRow::from(transaction))
            .map_err(|err| {
                log::error!("Failed to write transaction {}: {err}", transaction.id);
                ServiceError::Internal(err.to_string())
            })?;
    }
    csv_writer.flush().map_err(|err| {
        log::error!("Failed to flush transactions export: {err}");
        ServiceError::Internal(err.to_string())
    })?;

    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryRepository, Store};

    fn repo() -> InMemoryRepository {
        InMemoryRepository::new(Store::demo().unwrap())
    }

    fn ids(page: &PaymentsPageData) -> Vec<&str> {
        page.transactions.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn all_methods_keep_every_transaction() {
        let page = load_payments(&repo(), None, Some("all")).unwrap();
        assert_eq!(page.transactions.len(), 7);
        assert_eq!(page.method, None);
        assert_eq!(page.total_revenue, 450.0);
    }

    #[test]
    fn card_filter_matches_both_card_types() {
        let page = load_payments(&repo(), None, Some("Cartão")).unwrap();
        assert_eq!(ids(&page), vec!["T001", "T004", "T007"]);
        assert_eq!(page.total_revenue, 255.0);
    }

    #[test]
    fn query_and_method_combine() {
        let page = load_payments(&repo(), Some("t00"), Some("pix")).unwrap();
        assert_eq!(ids(&page), vec!["T002", "T005"]);
    }

    #[test]
    fn method_totals_cover_every_method() {
        let page = load_payments(&repo(), None, None).unwrap();
        let pix = page
            .method_totals
            .iter()
            .find(|m| m.method == PaymentMethod::Pix)
            .unwrap();
        assert_eq!(pix.count, 2);
        assert_eq!(pix.total, 130.0);
        assert_eq!(page.method_totals.len(), 4);
    }

    #[test]
    fn receipt_requires_known_transaction() {
        let notice = download_receipt(&repo(), "T003").unwrap();
        assert_eq!(notice.description, "O recibo #T003 foi baixado com sucesso.");
        assert!(matches!(
            download_receipt(&repo(), "T999"),
            Err(ServiceError::NotFound)
        ));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn export_writes_header_and_rows() {
        let page = load_payments(&repo(), Some("T001"), None).unwrap();
        let mut buffer = Vec::new();

        let written = export_transactions(&page.transactions, &mut buffer).unwrap();

        assert_eq!(written, 1);
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,date,client,service,amount,method,status")
        );
        assert_eq!(
            lines.next(),
            Some("T001,2023-07-15,João Silva,Corte + Barba,70.0,Cartão de Crédito,Completo")
        );
    }
}
