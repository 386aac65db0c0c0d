//! Presentation layer: table and bar rendering for the three views

pub mod dashboard;
pub mod metals;
pub mod profile;
pub mod setup;
pub mod ui;
