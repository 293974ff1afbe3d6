//! SIGEA Client - school-management administration client
//!
//! Typed Rust client for the SIGEA REST backend, plus the role-based view
//! composition used by the console front-end.
//!
//! # Architecture
//! - `api`: resource clients over the backend REST contract
//! - `config`: configuration management
//! - `errors`: unified error handling
//! - `models`: wire models per entity
//! - `services`: client-side logic (dashboards, reports, attachments)
//! - `session`: session/role state with persisted token and profile
//! - `utils`: validation helpers
//! - `views`: role-based navigation and dashboard composition

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;
pub mod views;
