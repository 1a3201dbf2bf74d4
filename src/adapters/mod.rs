//! Concrete adapter implementations for ports.

pub mod csv_output;
pub mod file_config_adapter;
pub mod file_source_adapter;
pub mod plain_output;
