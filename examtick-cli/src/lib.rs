//! examtick CLI Library
//!
//! This library exposes the CLI's internal modules for integration testing.

pub mod args;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod render;
pub mod source;
