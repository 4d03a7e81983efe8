use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::appointment::Appointment;

/// Headline numbers for the dashboard landing page.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub reference_date: NaiveDate,
    pub appointments_today: usize,
    pub pending_today: usize,
    pub upcoming: Vec<Appointment>,
    pub revenue_total: f64,
    pub total_clients: usize,
    pub average_rating: f64,
    pub low_stock_count: usize,
    pub unread_notifications: usize,
}
