use serde::Deserialize;
use validator::Validate;

use crate::domain::feedback::{NewFeedback, Sentiment};
use crate::domain::types::{PersonName, Rating, SanitizedText, ServiceName};
use crate::forms::{FormError, parse_date};

#[derive(Debug, Deserialize, Validate)]
/// Manual feedback registration dialog.
pub struct AddFeedbackForm {
    #[validate(length(min = 1))]
    pub client: String,
    /// `YYYY-MM-DD`
    pub date: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[validate(length(min = 1))]
    pub service: String,
    #[validate(length(min = 1))]
    pub barber: String,
    pub sentiment: Sentiment,
}

impl TryFrom<AddFeedbackForm> for NewFeedback {
    type Error = FormError;

    fn try_from(form: AddFeedbackForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewFeedback {
            client: PersonName::new(&form.client).map_err(|_| FormError::InvalidName)?,
            date: parse_date(&form.date)?,
            rating: Rating::new(form.rating).map_err(|_| FormError::InvalidRating)?,
            comment: SanitizedText::new(form.comment),
            service: ServiceName::new(&form.service).map_err(|_| FormError::InvalidName)?,
            barber: PersonName::new(&form.barber).map_err(|_| FormError::InvalidName)?,
            sentiment: form.sentiment,
        })
    }
}
