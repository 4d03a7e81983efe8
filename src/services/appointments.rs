//! Appointments panel: day list, status counters and the barber schedule.

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use crate::domain::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::dto::Notice;
use crate::dto::appointments::{AppointmentsPageData, ScheduleGrid, ScheduleRow, StatusCount};
use crate::forms::appointment::{
    AddAppointmentForm, AppointmentStatusForm, AppointmentStatusPayload,
};
use crate::repository::{AppointmentReader, AppointmentWriter, TeamReader};
use crate::search::{filter_records, query_or_empty};
use crate::services::{ServiceError, ServiceResult};
use crate::stats::count_where;

const FIRST_SLOT_HOUR: u32 = 8;
const LAST_SLOT_HOUR: u32 = 19;

/// Half-hour booking slots from 08:00 to 19:30.
pub fn time_slots() -> Vec<NaiveTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .flat_map(|hour| [0, 30].map(|minute| NaiveTime::from_hms_opt(hour, minute, 0)))
        .flatten()
        .collect()
}

/// Quick date tabs relative to the reference date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayTab {
    Today,
    Tomorrow,
}

impl DayTab {
    pub fn resolve(self, reference: NaiveDate) -> NaiveDate {
        match self {
            DayTab::Today => reference,
            DayTab::Tomorrow => step_day(reference, 1),
        }
    }
}

/// Moves the selected date by `offset` days, staying put at the calendar edges.
pub fn step_day(date: NaiveDate, offset: i64) -> NaiveDate {
    TimeDelta::try_days(offset)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// Appointments booked on `date`, in stored order.
pub fn appointments_on(appointments: Vec<Appointment>, date: NaiveDate) -> Vec<Appointment> {
    appointments.into_iter().filter(|a| a.date == date).collect()
}

pub fn status_counts(appointments: &[Appointment]) -> Vec<StatusCount> {
    AppointmentStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: count_where(appointments, |a| a.status == status),
        })
        .collect()
}

/// Lays the day's appointments out by slot and barber.
///
/// An appointment lands in the cell whose slot equals its start time;
/// bookings off the half-hour grid are not shown.
pub fn schedule_grid(appointments: &[Appointment], barbers: Vec<String>) -> ScheduleGrid {
    let rows = time_slots()
        .into_iter()
        .map(|time| ScheduleRow {
            time,
            cells: barbers
                .iter()
                .map(|barber| {
                    appointments
                        .iter()
                        .find(|a| a.time == time && a.barber.as_str() == barber)
                        .cloned()
                })
                .collect(),
        })
        .collect();

    ScheduleGrid { barbers, rows }
}

/// Team members first, then any other barber booked that day.
fn schedule_barbers(team: Vec<String>, appointments: &[Appointment]) -> Vec<String> {
    let mut barbers = team;
    for appointment in appointments {
        let barber = appointment.barber.as_str();
        if !barbers.iter().any(|b| b == barber) {
            barbers.push(barber.to_string());
        }
    }
    barbers
}

/// Loads the appointments panel for one day.
///
/// Counters and the schedule cover the whole day; only the list follows
/// `query`.
pub fn load_appointments<R>(
    repo: &R,
    date: NaiveDate,
    query: Option<&str>,
) -> ServiceResult<AppointmentsPageData>
where
    R: AppointmentReader + TeamReader + ?Sized,
{
    let query = query_or_empty(query);

    let appointments = repo.list_appointments().map_err(|err| {
        log::error!("Failed to list appointments: {err}");
        err
    })?;
    let team = repo.list_team_members().map_err(|err| {
        log::error!("Failed to list team members: {err}");
        err
    })?;

    let day = appointments_on(appointments, date);
    let barbers = schedule_barbers(
        team.into_iter().map(|m| m.name.into_inner()).collect(),
        &day,
    );

    Ok(AppointmentsPageData {
        date,
        status_counts: status_counts(&day),
        schedule: schedule_grid(&day, barbers),
        appointments: filter_records(day, &query),
        query,
    })
}

/// Books a new appointment; it starts out pending.
pub fn add_appointment<R>(repo: &R, form: AddAppointmentForm) -> ServiceResult<Notice>
where
    R: AppointmentWriter + ?Sized,
{
    let new_appointment = NewAppointment::try_from(form).map_err(|err| {
        log::warn!("Rejected appointment form: {err}");
        ServiceError::from(err)
    })?;

    let appointment = repo.create_appointment(&new_appointment).map_err(|err| {
        log::error!("Failed to add an appointment: {err}");
        err
    })?;

    Ok(Notice::success(
        "Agendamento criado",
        format!(
            "{} às {} com {}.",
            appointment.client,
            appointment.time.format("%H:%M"),
            appointment.barber
        ),
    ))
}

pub fn set_appointment_status<R>(repo: &R, form: AppointmentStatusForm) -> ServiceResult<Notice>
where
    R: AppointmentWriter + ?Sized,
{
    let payload = AppointmentStatusPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected appointment status: {err}");
        ServiceError::from(err)
    })?;

    let appointment = repo
        .set_appointment_status(payload.id, payload.status)
        .map_err(|err| {
            log::error!("Failed to update appointment {}: {err}", payload.id);
            err
        })?;

    Ok(Notice::success(
        "Status atualizado",
        format!("Agendamento de {} agora está {}.", appointment.client, appointment.status),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryRepository, Store};

    fn repo() -> InMemoryRepository {
        InMemoryRepository::new(Store::demo().unwrap())
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, day).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn slots_cover_business_hours() {
        let slots = time_slots();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0], at(8, 0));
        assert_eq!(slots[23], at(19, 30));
    }

    #[test]
    fn tabs_resolve_against_reference_date() {
        assert_eq!(DayTab::Today.resolve(june(12)), june(12));
        assert_eq!(DayTab::Tomorrow.resolve(june(30)), NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
        assert_eq!(step_day(june(12), -1), june(11));
    }

    #[test]
    fn day_view_counts_every_status() {
        let page = load_appointments(&repo(), june(12), None).unwrap();
        assert_eq!(page.appointments.len(), 5);
        assert_eq!(
            page.status_counts,
            vec![
                StatusCount { status: AppointmentStatus::Confirmed, count: 3 },
                StatusCount { status: AppointmentStatus::Pending, count: 1 },
                StatusCount { status: AppointmentStatus::Canceled, count: 1 },
            ]
        );
    }

    #[test]
    fn query_narrows_list_only() {
        let page = load_appointments(&repo(), june(12), Some("andré")).unwrap();
        let ids: Vec<i32> = page.appointments.iter().map(|a| a.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(page.status_counts.iter().map(|c| c.count).sum::<usize>(), 5);
    }

    #[test]
    fn schedule_places_bookings_by_barber() {
        let page = load_appointments(&repo(), june(12), None).unwrap();
        let grid = page.schedule;
        assert_eq!(grid.barbers, vec!["André Silva", "Marcos Souza", "Rodrigo Almeida"]);

        let row = grid.rows.iter().find(|r| r.time == at(9, 30)).unwrap();
        assert_eq!(row.cells[0].as_ref().map(|a| a.id.get()), Some(1));
        assert!(row.cells[1].is_none());

        let booked = grid.rows.iter().flat_map(|r| &r.cells).flatten().count();
        assert_eq!(booked, 5);
    }

    #[test]
    fn empty_day_has_empty_list() {
        let page = load_appointments(&repo(), june(20), Some("joão")).unwrap();
        assert!(page.appointments.is_empty());
        assert!(page.status_counts.iter().all(|c| c.count == 0));
    }

    #[test]
    fn booking_then_confirming() {
        let repo = repo();
        let form = AddAppointmentForm {
            client: "Lucas Prado".to_string(),
            service: "Barba".to_string(),
            date: "2023-06-13".to_string(),
            time: "15:00".to_string(),
            duration: "30".to_string(),
            price: "35".to_string(),
            barber: "Marcos Souza".to_string(),
            ..AddAppointmentForm::default()
        };
        add_appointment(&repo, form).unwrap();

        let page = load_appointments(&repo, june(13), Some("lucas")).unwrap();
        assert_eq!(page.appointments[0].status, AppointmentStatus::Pending);
        let id = page.appointments[0].id.get();

        set_appointment_status(
            &repo,
            AppointmentStatusForm { id, status: "confirmed".to_string() },
        )
        .unwrap();
        let page = load_appointments(&repo, june(13), Some("lucas")).unwrap();
        assert_eq!(page.appointments[0].status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn unknown_appointment_is_not_found() {
        let result = set_appointment_status(
            &repo(),
            AppointmentStatusForm { id: 99, status: "pending".to_string() },
        );
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
