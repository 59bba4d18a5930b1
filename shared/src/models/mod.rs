//! Data models
//!
//! Shared between the HTTP client and the console-side permission model.
//! These mirror the permission service's wire shapes; all IDs are UUIDs.

pub mod menu_item;
pub mod module;
pub mod permission;
pub mod plan;
pub mod role;

// Re-exports
pub use menu_item::*;
pub use module::*;
pub use permission::*;
pub use plan::*;
pub use role::*;
