//! DTOs for the analytics panel.

use serde::Serialize;

use crate::domain::analytics::{MonthlyRevenue, WeekdayVolume};

#[derive(Debug, Serialize, PartialEq)]
pub struct ServiceShare {
    pub name: String,
    pub bookings: u32,
    pub percentage: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProfessionalSummary {
    pub name: String,
    pub haircuts: u32,
    pub beard: u32,
    pub color: u32,
    pub total_services: u64,
    pub estimated_revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsPageData {
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub annual_revenue: f64,
    pub monthly_average: f64,
    pub service_share: Vec<ServiceShare>,
    pub weekly_appointments: Vec<WeekdayVolume>,
    /// First weekday with the most bookings; `None` without data.
    pub busiest_day: Option<WeekdayVolume>,
    pub professionals: Vec<ProfessionalSummary>,
}
