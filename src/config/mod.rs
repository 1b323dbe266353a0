//! Application configuration
//!
//! Environment-driven settings plus the named defaults they fall back to.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
