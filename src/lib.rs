//! HeartMatch - profile discovery service for the HeartMatch matrimonial app
//!
//! This library holds the discovery filter (panel state normalization and the
//! profile filter evaluator), seeded sampling for suggestions, and the HTTP
//! routes that serve them over a static, in-memory profile dataset.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{evaluate, normalize, FilterBuilder};
pub use models::{Profile, Gender, FilterCriteria, FilterForm, GenderChoice};
pub use services::{ProfileCatalog, SessionStore, SessionContext};
