//! Module Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MenuItem;

/// Module entity (functional grouping of menu items)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Navigation tree node: a module and the menu items visible under it
///
/// Produced client-side from the flat module/menu lists; modules and items
/// are both ordered by `sort_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationModule {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub items: Vec<MenuItem>,
}

impl NavigationModule {
    /// Build a navigation node from a module and its visible items
    pub fn new(module: &Module, items: Vec<MenuItem>) -> Self {
        Self {
            id: module.id,
            code: module.code.clone(),
            name: module.name.clone(),
            icon: module.icon.clone(),
            sort_order: module.sort_order,
            items,
        }
    }
}
