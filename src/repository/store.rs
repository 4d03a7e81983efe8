//! Seed records backing the in-memory repository.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::analytics::AnalyticsData;
use crate::domain::appointment::Appointment;
use crate::domain::catalog::ServiceOffering;
use crate::domain::client::Client;
use crate::domain::feedback::Feedback;
use crate::domain::loyalty::LoyaltyRecord;
use crate::domain::notification::Notification;
use crate::domain::product::Product;
use crate::domain::team::TeamMember;
use crate::domain::transaction::Transaction;
use crate::repository::errors::RepositoryResult;

const DEMO_STORE: &str = include_str!("../../data/demo_store.json");

/// Every record the dashboard knows about, in display order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Store {
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub appointments: Vec<Appointment>,
    pub transactions: Vec<Transaction>,
    pub feedback: Vec<Feedback>,
    pub team_members: Vec<TeamMember>,
    pub loyalty_records: Vec<LoyaltyRecord>,
    pub services: Vec<ServiceOffering>,
    pub notifications: Vec<Notification>,
    pub analytics: AnalyticsData,
}

impl Store {
    /// The demo shop shipped with the crate.
    pub fn demo() -> RepositoryResult<Self> {
        Self::from_json(DEMO_STORE)
    }

    pub fn from_json(raw: &str) -> RepositoryResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_json(&raw)?;
        log::info!(
            "Loaded seed file {} with {} clients and {} products",
            path.as_ref().display(),
            store.clients.len(),
            store.products.len()
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn demo_store_parses() {
        let store = Store::demo().expect("demo data should parse");
        assert_eq!(store.clients.len(), 5);
        assert_eq!(store.products.len(), 5);
        assert_eq!(store.appointments.len(), 6);
        assert_eq!(store.transactions.len(), 7);
        assert_eq!(store.feedback.len(), 5);
        assert_eq!(store.team_members.len(), 3);
        assert_eq!(store.loyalty_records.len(), 5);
        assert_eq!(store.services.len(), 5);
        assert_eq!(store.notifications.len(), 6);
        assert_eq!(store.analytics.monthly_revenue.len(), 12);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let store = Store::from_json("{}").unwrap();
        assert_eq!(store, Store::default());
    }

    #[test]
    fn invalid_records_are_rejected() {
        let raw = r#"{"feedback": [{"id": 1, "client": "X", "date": "2023-06-01", "rating": 9,
            "comment": "", "service": "Corte", "barber": "A", "sentiment": "neutral",
            "response_status": "pending"}]}"#;
        assert!(Store::from_json(raw).is_err());
    }

    #[test]
    fn loads_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"clients": [{{"id": 9, "name": "Ana", "email": "ana@exemplo.com",
                "phone": "", "visits": 1, "last_visit": null, "total_spent": 50.0}}]}}"#
        )
        .unwrap();

        let store = Store::from_json_file(file.path()).unwrap();
        assert_eq!(store.clients.len(), 1);
        assert_eq!(store.clients[0].name.as_str(), "Ana");
        assert!(store.clients[0].preferences.is_empty());
    }
}
