//! Landing page summary built from every panel's records.

use chrono::NaiveDate;

use crate::domain::appointment::{Appointment, AppointmentStatus};
use crate::domain::transaction::PaymentStatus;
use crate::dto::dashboard::DashboardSummary;
use crate::repository::{
    AppointmentReader, ClientReader, FeedbackReader, NotificationReader, ProductReader,
    TransactionReader,
};
use crate::services::ServiceResult;
use crate::services::appointments::appointments_on;
use crate::services::feedback::average_rating;
use crate::stats::{count_where, round2};

/// Bookings on the day that still need a chair, by start time.
fn upcoming(day: &[Appointment]) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = day
        .iter()
        .filter(|a| a.status != AppointmentStatus::Canceled)
        .cloned()
        .collect();
    upcoming.sort_by_key(|a| a.time);
    upcoming
}

pub fn load_summary<R>(repo: &R, reference_date: NaiveDate) -> ServiceResult<DashboardSummary>
where
    R: AppointmentReader
        + ClientReader
        + FeedbackReader
        + NotificationReader
        + ProductReader
        + TransactionReader
        + ?Sized,
{
    let appointments = repo.list_appointments().map_err(|err| {
        log::error!("Failed to list appointments: {err}");
        err
    })?;
    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to list transactions: {err}");
        err
    })?;
    let clients = repo.list_clients().map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;
    let feedback = repo.list_feedback().map_err(|err| {
        log::error!("Failed to list feedback: {err}");
        err
    })?;
    let products = repo.list_products().map_err(|err| {
        log::error!("Failed to list products: {err}");
        err
    })?;
    let notifications = repo.list_notifications().map_err(|err| {
        log::error!("Failed to list notifications: {err}");
        err
    })?;

    let today = appointments_on(appointments, reference_date);
    let revenue = transactions
        .iter()
        .filter(|t| t.status == PaymentStatus::Completed)
        .map(|t| t.amount)
        .sum();

    Ok(DashboardSummary {
        reference_date,
        appointments_today: today.len(),
        pending_today: count_where(&today, |a| a.status == AppointmentStatus::Pending),
        upcoming: upcoming(&today),
        revenue_total: round2(revenue),
        total_clients: clients.len(),
        average_rating: average_rating(&feedback),
        low_stock_count: count_where(&products, |p| p.is_low_stock()),
        unread_notifications: count_where(&notifications, |n| !n.read),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryRepository, Store};

    #[test]
    fn summary_of_demo_shop() {
        let repo = InMemoryRepository::new(Store::demo().unwrap());
        let date = NaiveDate::from_ymd_opt(2023, 6, 12).unwrap();

        let summary = load_summary(&repo, date).unwrap();

        assert_eq!(summary.appointments_today, 5);
        assert_eq!(summary.pending_today, 1);
        assert_eq!(summary.upcoming.len(), 4);
        assert_eq!(summary.revenue_total, 450.0);
        assert_eq!(summary.total_clients, 5);
        assert_eq!(summary.average_rating, 3.8);
        assert_eq!(summary.low_stock_count, 3);
        assert_eq!(summary.unread_notifications, 3);
    }

    #[test]
    fn empty_store_summary_is_zero() {
        let repo = InMemoryRepository::default();
        let date = NaiveDate::from_ymd_opt(2023, 6, 12).unwrap();

        let summary = load_summary(&repo, date).unwrap();

        assert_eq!(summary.appointments_today, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert!(summary.upcoming.is_empty());
    }
}
