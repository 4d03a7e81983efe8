//! Services offered by the shop.

use serde::{Deserialize, Serialize};

use crate::domain::types::{SanitizedText, ServiceId, ServiceName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceOffering {
    pub id: ServiceId,
    pub name: ServiceName,
    #[serde(default)]
    pub description: SanitizedText,
    pub duration_minutes: u32,
    pub price: f64,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewServiceOffering {
    pub name: ServiceName,
    pub description: SanitizedText,
    pub duration_minutes: u32,
    pub price: f64,
    pub popular: bool,
}

impl NewServiceOffering {
    #[must_use]
    pub fn into_offering(self, id: ServiceId) -> ServiceOffering {
        ServiceOffering {
            id,
            name: self.name,
            description: self.description,
            duration_minutes: self.duration_minutes,
            price: self.price,
            popular: self.popular,
        }
    }
}
