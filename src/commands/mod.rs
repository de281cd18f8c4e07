//! Command handlers module.
//!
//! - `core.rs`: capture, parse and init
//! - `config.rs`: configuration display

mod config;
mod core;

pub use config::cmd_config;
pub use core::{cmd_capture, cmd_init, cmd_parse};
