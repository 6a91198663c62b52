//! abd-admin: a terminal admin dashboard for the a-b-d catalogue API.
//!
//! The library holds everything but `main`, so integration tests can
//! drive controllers, workers and rendering directly.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod resource;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
