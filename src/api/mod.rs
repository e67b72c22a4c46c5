//! HTTP client for the inventory generation backend.

mod client;
mod error;
mod types;


pub use client::{ApiClient, DEFAULT_API_BASE};
pub use error::ApiError;
pub use types::{GenerationRequest, GenerationResult, HealthStatus, RoleList, Style};
