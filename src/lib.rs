//! PRD Proxy - forwarding shim for the OpenDeepSearch PRD generator
//!
//! This library exposes a single proxy handler: it validates an inbound
//! deep-research query, forwards it with fixed parameters to the upstream
//! API, and relays the upstream's response (or a mapped error) back.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::models::{ErrorResponse, HealthResponse, ResearchRequest, ResearchResponse};
pub use crate::routes::research::AppState;
pub use crate::services::{UpstreamClient, UpstreamError};
