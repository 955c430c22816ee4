//! Runtime wiring
//!
//! Connects the pure Elm core to the terminal, the letter service and timers.

pub mod app_runner;
pub mod runtime;
