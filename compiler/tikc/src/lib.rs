//! TIK command line driver.
//!
//! The binary in `main.rs` only parses arguments and prints; everything it
//! runs lives here so it can be tested and benchmarked directly.

pub mod commands;
pub mod diagnostic;
mod logging;

pub use logging::init_tracing;
