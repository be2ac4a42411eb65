//! tradebook — completed-trade history records and their text encodings.
//!
//! Hexagonal architecture: domain types in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
