//! Client-related types shared between the permission service and console
//!
//! Common response types used in API communication. These types are shared
//! between helm-client and helm-console.

use serde::{Deserialize, Serialize};

use crate::models::{MenuItem, Module, PermissionFlags};
use uuid::Uuid;

// =============================================================================
// Permission API DTOs
// =============================================================================

/// Available menus for the current tenant's subscription plan
///
/// The universe of menu items any role permission can reference. Items not
/// listed here are never shown, even if a stale role record points at them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableMenusResponse {
    pub current_plan: String,
    pub plan_name: String,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

impl AvailableMenusResponse {
    /// Look up a menu item by id
    pub fn menu_item(&self, id: Uuid) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == id)
    }
}

/// One menu item's effective flags for the current user
///
/// Already unioned across the user's roles by the backend; the console
/// re-reduces on commit so duplicates stay harmless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMenuPermission {
    pub menu_item_id: Uuid,
    pub permission_key: String,
    #[serde(flatten)]
    pub flags: PermissionFlags,
}

/// Current user's effective permissions response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPermissionsResponse {
    #[serde(default)]
    pub permissions: Vec<UserMenuPermission>,
}
