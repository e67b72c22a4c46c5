//! Local inventory logic: role filtering, request composition and export.

pub mod export;
pub mod filter;
pub mod request;


pub use export::{DEFAULT_INVENTORY_FILENAME, INVENTORY_MIME_TYPE, export_inventory};
pub use filter::{RoleFilter, filter_roles};
pub use request::{DEFAULT_HOST, compose_request, parse_ignore_list};
