use serde::Deserialize;
use validator::Validate;

use crate::domain::catalog::NewServiceOffering;
use crate::domain::types::{SanitizedText, ServiceName};
use crate::forms::{FormError, parse_number_or_zero};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddServiceForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Minutes.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub popular: bool,
}

impl TryFrom<AddServiceForm> for NewServiceOffering {
    type Error = FormError;

    fn try_from(form: AddServiceForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewServiceOffering {
            name: ServiceName::new(&form.name).map_err(|_| FormError::InvalidName)?,
            description: SanitizedText::new(form.description),
            duration_minutes: parse_number_or_zero(&form.duration),
            price: parse_number_or_zero::<f64>(&form.price).max(0.0),
            popular: form.popular,
        })
    }
}
