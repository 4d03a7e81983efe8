//! Shared fixtures for integration tests.

use barbershop_dashboard::repository::{InMemoryRepository, Store};
use chrono::NaiveDate;

/// Fresh repository seeded with the bundled demo shop.
pub fn demo_repo() -> InMemoryRepository {
    InMemoryRepository::new(Store::demo().expect("demo data should parse"))
}

/// Day the demo appointments are booked around.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 12).expect("valid date")
}
