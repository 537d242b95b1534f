// Service exports
pub mod upstream;

pub use upstream::{UpstreamClient, UpstreamError, MAX_SOURCES, PRO_MODE};
