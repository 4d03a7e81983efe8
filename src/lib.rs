//! Data layer behind a barbershop management dashboard.
//!
//! Records live in a shared in-memory store; panels are re-derived from it
//! on every request through the services in [`services`].

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod search;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod stats;
