//! Core domain types and logic.

pub mod entry;
pub mod exchange;
pub mod watchlist;
pub mod error;
