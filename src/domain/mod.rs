//! Domain records exposed by the dashboard service layer.

pub mod analytics;
pub mod appointment;
pub mod catalog;
pub mod client;
pub mod feedback;
pub mod loyalty;
pub mod notification;
pub mod product;
pub mod team;
pub mod transaction;
pub mod types;
