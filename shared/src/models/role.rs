//! Role Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{PermissionEntry, RolePermission};

/// Role entity with its per-menu-item permission records
///
/// System roles (`is_system = true`) are seeded by the backend and cannot
/// be modified or deleted through the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_system: bool,
    #[serde(default)]
    pub permissions: Vec<RolePermission>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleCreate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<PermissionEntry>,
}

/// Update role payload
///
/// `permissions`, when present, replaces the role's permission list
/// wholesale; records referencing menu items outside the tenant's plan are
/// rejected by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleUpdate {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<PermissionEntry>>,
}
