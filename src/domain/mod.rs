//! Core domain types.

pub mod config;
pub mod error;
pub mod format;
pub mod trade_record;
