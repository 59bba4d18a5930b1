//! Helm Client - HTTP client for the permission service
//!
//! Provides network-based HTTP calls to the permission service API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::PermissionsApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{AvailableMenusResponse, UserMenuPermission, UserPermissionsResponse};
pub use shared::models::{Role, RoleCreate, RoleUpdate};
