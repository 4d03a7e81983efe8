//! Models loaded from outside the record store.

pub mod config;
