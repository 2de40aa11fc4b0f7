//! Study Monk - a terminal landing page for a study-plan product
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod ui;
pub mod view_state;
