//! Pure permission/menu resolution utilities
//!
//! Everything here is total: no I/O, no hidden state, and no error paths.
//! Callers get safe defaults instead of `Option`/`Result` so rendering
//! code never needs a defensive branch around a lookup.

use std::collections::HashMap;

use shared::models::{MenuItem, Module, PermissionEntry};
use uuid::Uuid;

/// A module together with its menu items, sorted by item `sort_order`
#[derive(Debug, Clone)]
pub struct MenuGroup {
    pub module: Module,
    pub items: Vec<MenuItem>,
}

/// Group menu items under their modules
///
/// Only modules that own at least one of `items` appear in the result.
/// Items within each group are sorted by `sort_order` (stable, so equal
/// orders keep their input order). Module-level ordering is the caller's
/// job. Items whose `module_id` matches no module are skipped.
pub fn group_menus_by_module(items: &[MenuItem], modules: &[Module]) -> HashMap<Uuid, MenuGroup> {
    let mut groups: HashMap<Uuid, MenuGroup> = HashMap::new();

    for item in items {
        let Some(module) = modules.iter().find(|m| m.id == item.module_id) else {
            continue;
        };
        groups
            .entry(module.id)
            .or_insert_with(|| MenuGroup {
                module: module.clone(),
                items: Vec::new(),
            })
            .items
            .push(item.clone());
    }

    for group in groups.values_mut() {
        group.items.sort_by_key(|item| item.sort_order);
    }

    groups
}

/// The permission entry for a menu item, synthesizing an all-false entry
/// when none exists — never `None`
pub fn permission_for_item(permissions: &[PermissionEntry], menu_item_id: Uuid) -> PermissionEntry {
    permissions
        .iter()
        .find(|entry| entry.menu_item_id == menu_item_id)
        .cloned()
        .unwrap_or_else(|| PermissionEntry::empty(menu_item_id))
}
