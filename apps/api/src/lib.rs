//! Résumé quality scoring service.
//!
//! [`analysis`] holds the local, deterministic scorer; the remaining modules
//! expose it over HTTP.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod routes;
pub mod state;

pub use analysis::analyze;
