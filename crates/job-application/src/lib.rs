//! Job application form: document model, persistence, and HTTP routes.

pub mod config;
pub mod error;
pub mod form;
pub mod telemetry;
