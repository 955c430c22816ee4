//! Reusable UI widgets

pub mod letter_grid;
pub mod page_bar;
pub mod status_bar;
