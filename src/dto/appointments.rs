//! DTOs for the appointments panel and its schedule grid.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::domain::appointment::{Appointment, AppointmentStatus};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusCount {
    pub status: AppointmentStatus,
    pub count: usize,
}

/// One half-hour row of the schedule, with a cell per barber.
#[derive(Debug, Serialize)]
pub struct ScheduleRow {
    pub time: NaiveTime,
    pub cells: Vec<Option<Appointment>>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleGrid {
    pub barbers: Vec<String>,
    pub rows: Vec<ScheduleRow>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentsPageData {
    pub date: NaiveDate,
    pub query: String,
    pub appointments: Vec<Appointment>,
    pub status_counts: Vec<StatusCount>,
    pub schedule: ScheduleGrid,
}
