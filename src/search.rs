//! Case-insensitive substring search shared by every list panel.

use crate::domain::appointment::Appointment;
use crate::domain::catalog::ServiceOffering;
use crate::domain::client::Client;
use crate::domain::feedback::Feedback;
use crate::domain::loyalty::LoyaltyRecord;
use crate::domain::product::Product;
use crate::domain::team::TeamMember;
use crate::domain::transaction::Transaction;

/// Records that expose a fixed set of text fields to the search box.
pub trait Searchable {
    /// Fields matched against the query, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any field contains `needle`, which must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Keeps the records matching `query`, preserving their order.
///
/// An empty query returns the input unchanged.
pub fn filter_records<T>(records: Vec<T>, query: &str) -> Vec<T>
where
    T: Searchable,
{
    if query.is_empty() {
        return records;
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.matches_lowercase(&needle))
        .collect()
}

/// The search box value as typed; a missing value means no filter.
pub fn query_or_empty(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client.as_str(), self.service.as_str(), self.id.as_str()]
    }
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client.as_str(),
            self.service.as_str(),
            self.barber.as_str(),
        ]
    }
}

impl Searchable for LoyaltyRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client.as_str()]
    }
}

impl Searchable for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.role.as_str()];
        fields.extend(self.specialty.iter().map(String::as_str));
        fields
    }
}

impl Searchable for ServiceOffering {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for Feedback {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client.as_str(),
            self.comment.as_str(),
            self.service.as_str(),
            self.barber.as_str(),
        ]
    }
}
