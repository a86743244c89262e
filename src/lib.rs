//! Fyyur library
//!
//! Exposes the application modules to the binary and integration tests

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;
