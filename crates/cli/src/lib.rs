//! `armory-cli` — demonstration of the equipment collection and inventory.

pub mod config;
pub mod demo;

pub use config::{ConfigError, DemoConfig};
