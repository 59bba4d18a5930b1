//! Menu Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Menu item entity (one navigable screen/resource within a module)
///
/// `permission_key` is the string UI call sites check against; it is not
/// required to be unique across items, and duplicate keys resolve
/// permissively (any matching item that grants an action grants it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub module_id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub route: Option<String>,
    pub permission_key: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
