//! Presentation layer
//!
//! This module contains the ratatui side of the gallery:
//! - Screen geometry shared by drawing and mouse hit-testing
//! - Reusable widgets
//! - The top-level view

pub mod layout;
pub mod view;
pub mod widgets;
