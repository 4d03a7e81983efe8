use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, ClientId, PersonName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: PersonName,
    pub email: ClientEmail,
    /// Phone number as the client typed it, kept for display and search.
    pub phone: String,
    pub visits: u32,
    pub last_visit: Option<NaiveDate>,
    pub total_spent: f64,
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub name: PersonName,
    pub email: ClientEmail,
    pub phone: String,
    pub preferences: Vec<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: PersonName,
        email: ClientEmail,
        phone: impl Into<String>,
        preferences: Vec<String>,
    ) -> Self {
        Self {
            name,
            email,
            phone: phone.into().trim().to_string(),
            preferences: preferences
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Materializes the record once the store has assigned an identifier.
    #[must_use]
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            visits: 0,
            last_visit: None,
            total_spent: 0.0,
            preferences: self.preferences,
        }
    }
}
