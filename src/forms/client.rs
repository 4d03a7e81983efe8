use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{ClientEmail, PersonName, PhoneNumber};
use crate::forms::{FormError, split_list};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for registering a new client.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Optional contact phone; validated when present.
    #[serde(default)]
    pub phone: String,
    /// Comma separated service preferences.
    #[serde(default)]
    pub preferences: String,
}

impl TryFrom<AddClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = PersonName::new(&form.name).map_err(|_| FormError::InvalidName)?;
        let email = ClientEmail::new(&form.email).map_err(|_| FormError::InvalidEmail)?;
        if !form.phone.trim().is_empty() {
            PhoneNumber::new(&form.phone).map_err(|_| FormError::InvalidPhoneNumber)?;
        }

        Ok(NewClient::new(
            name,
            email,
            form.phone,
            split_list(&form.preferences),
        ))
    }
}
