use serde::Deserialize;
use validator::Validate;

use crate::domain::appointment::{AppointmentStatus, NewAppointment};
use crate::domain::types::{AppointmentId, PersonName, SanitizedText, ServiceName};
use crate::forms::{FormError, parse_date, parse_number_or_zero, parse_time};

#[derive(Debug, Default, Deserialize, Validate)]
/// Booking dialog.
pub struct AddAppointmentForm {
    #[validate(length(min = 1))]
    pub client: String,
    #[validate(length(min = 1))]
    pub service: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub price: String,
    #[validate(length(min = 1))]
    pub barber: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

impl TryFrom<AddAppointmentForm> for NewAppointment {
    type Error = FormError;

    fn try_from(form: AddAppointmentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewAppointment {
            client: PersonName::new(&form.client).map_err(|_| FormError::InvalidName)?,
            service: ServiceName::new(&form.service).map_err(|_| FormError::InvalidName)?,
            date: parse_date(&form.date)?,
            time: parse_time(&form.time)?,
            duration_minutes: parse_number_or_zero(&form.duration),
            price: parse_number_or_zero::<f64>(&form.price).max(0.0),
            barber: PersonName::new(&form.barber).map_err(|_| FormError::InvalidName)?,
            phone: form.phone.trim().to_string(),
            notes: SanitizedText::new(form.notes),
        })
    }
}

#[derive(Debug, Deserialize)]
/// Status picker on an existing booking.
pub struct AppointmentStatusForm {
    pub id: i32,
    pub status: String,
}

/// Validated status change.
pub struct AppointmentStatusPayload {
    pub id: AppointmentId,
    pub status: AppointmentStatus,
}

impl TryFrom<AppointmentStatusForm> for AppointmentStatusPayload {
    type Error = FormError;

    fn try_from(form: AppointmentStatusForm) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AppointmentId::new(form.id).map_err(|_| FormError::InvalidStatus)?,
            status: form.status.parse().map_err(|_| FormError::InvalidStatus)?,
        })
    }
}
