//! Sidebar navigation tree derivation
//!
//! Pure derivation over the session store's committed snapshot: visible
//! menu items, grouped by module, both levels ordered by `sort_order`.
//! The builder holds no cache of its own; callers re-derive whenever
//! [`PermissionSessionStore::version`] changes.

use shared::models::NavigationModule;

use crate::resolver::group_menus_by_module;
use crate::session::{PermissionSessionStore, SessionError};

/// What the sidebar should render
#[derive(Debug, Clone)]
pub enum NavigationView {
    /// Session data not loaded yet
    Loading,
    /// Permissions could not be loaded; distinct from having no access
    Failed(SessionError),
    /// Loaded, but the user can view nothing: show an explicit
    /// "contact your administrator" state, not an empty sidebar
    NoAccess,
    /// The ordered, module-grouped navigation tree
    Ready(Vec<NavigationModule>),
}

impl NavigationView {
    /// Derive the navigation tree from the store's current snapshot
    pub fn build(store: &PermissionSessionStore) -> Self {
        if !store.is_loaded() {
            if let Some(err) = store.error() {
                if !store.is_loading() {
                    return NavigationView::Failed(err);
                }
            }
            return NavigationView::Loading;
        }

        let items = store.available_menu_items();
        if items.is_empty() {
            return NavigationView::NoAccess;
        }

        let modules = store.modules();
        let mut tree: Vec<NavigationModule> = group_menus_by_module(&items, &modules)
            .into_values()
            .map(|group| NavigationModule::new(&group.module, group.items))
            .collect();
        tree.sort_by_key(|module| module.sort_order);

        tracing::debug!(modules = tree.len(), "navigation tree rebuilt");
        NavigationView::Ready(tree)
    }

    /// The tree, when ready
    pub fn modules(&self) -> Option<&[NavigationModule]> {
        match self {
            NavigationView::Ready(modules) => Some(modules),
            _ => None,
        }
    }
}
