//! Persistence collaborators
//!
//! - [`json_store`] - Single-file JSON ledger store with atomic saves

pub mod json_store;

pub use json_store::JsonStore;
