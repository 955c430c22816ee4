//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - Terminal foundation and CLI argument processing
//! - Layered configuration
//! - Letter sources (REST backend, local fixtures) and the background loader
//! - Timers used by the hover state machine

pub mod cli;
pub mod config;
pub mod debounce;
pub mod letter_service;
pub mod loader;
pub mod source;
pub mod tui;
