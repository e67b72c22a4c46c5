pub mod api;
pub mod config;
pub mod interactive;
pub mod inventory;
pub mod logging;

pub use api::{
    ApiClient, ApiError, DEFAULT_API_BASE, GenerationRequest, GenerationResult, HealthStatus,
    RoleList, Style,
};
pub use config::Config;
pub use interactive::InteractiveApp;
pub use inventory::{compose_request, export_inventory, filter_roles, parse_ignore_list};
