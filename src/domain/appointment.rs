use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AppointmentId, PersonName, SanitizedText, ServiceName, TypeConstraintError};

/// Booking state. Set directly; there is no transition table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Canceled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Pending,
        AppointmentStatus::Canceled,
    ];
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Canceled => write!(f, "canceled"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "pending" => Ok(AppointmentStatus::Pending),
            "canceled" | "cancelled" => Ok(AppointmentStatus::Canceled),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown appointment status `{other}`"
            ))),
        }
    }
}

/// A booked slot. Client and barber are referenced by name only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client: PersonName,
    pub service: ServiceName,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub price: f64,
    pub status: AppointmentStatus,
    pub barber: PersonName,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: SanitizedText,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAppointment {
    pub client: PersonName,
    pub service: ServiceName,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub price: f64,
    pub barber: PersonName,
    pub phone: String,
    pub notes: SanitizedText,
}

impl NewAppointment {
    /// New bookings wait for confirmation.
    #[must_use]
    pub fn into_appointment(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            client: self.client,
            service: self.service,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            price: self.price,
            status: AppointmentStatus::Pending,
            barber: self.barber,
            phone: self.phone,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in AppointmentStatus::ALL {
            assert_eq!(status.to_string().parse::<AppointmentStatus>(), Ok(status));
        }
        assert_eq!("Cancelled".parse(), Ok(AppointmentStatus::Canceled));
        assert!("done".parse::<AppointmentStatus>().is_err());
    }
}
