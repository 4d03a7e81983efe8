pub mod analytics;
pub mod appointments;
pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod errors;
pub mod feedback;
pub mod inventory;
pub mod loyalty;
pub mod notifications;
pub mod payments;
pub mod team;

pub use errors::{ServiceError, ServiceResult};
