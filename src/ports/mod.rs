//! Port traits implemented by concrete adapters.

pub mod config_port;
pub mod source_port;
pub mod output_port;
