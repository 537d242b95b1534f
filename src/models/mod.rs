// Model exports
pub mod requests;
pub mod responses;

pub use requests::ResearchRequest;
pub use responses::{ErrorResponse, HealthResponse, ResearchResponse};
