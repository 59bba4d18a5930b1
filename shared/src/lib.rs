//! Shared types for the Helm console framework
//!
//! Common types used across the client and console crates: permission
//! models, the built-in menu catalog, error types, and response structures.

pub mod catalog;
pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use client::{AvailableMenusResponse, UserMenuPermission, UserPermissionsResponse};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{PermissionAction, PermissionFlags};
