//! Role permission matrix editor
//!
//! Draft state for authoring one role's permission list against the
//! tenant's available-menus universe. The editor owns the draft until a
//! save succeeds; the backend owns the record afterwards. Rules enforced
//! on every mutation:
//!
//! - dependent actions force `can_view` on; revoking `can_view` revokes
//!   the dependents in the same step
//! - records with all flags false are pruned immediately, so the draft
//!   (and therefore the submission payload) never carries an empty row
//! - module-level toggles converge: a partially-set column turns fully on,
//!   a fully-set column turns fully off

use helm_client::{ClientResult, PermissionsApi};
use shared::client::AvailableMenusResponse;
use shared::models::{
    MenuItem, PermissionAction, PermissionEntry, Role, RoleCreate, RoleUpdate,
};
use uuid::Uuid;

use crate::resolver::{MenuGroup, group_menus_by_module, permission_for_item};

/// Aggregate state of one (module, action) checkbox column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    /// No item in the module has the flag
    Off,
    /// Every item in the module has the flag
    On,
    /// Some, but not all, items have the flag
    Partial,
}

/// Draft editor for one role's permission matrix
#[derive(Debug, Clone)]
pub struct PermissionMatrixEditor {
    universe: AvailableMenusResponse,
    groups: Vec<MenuGroup>,
    draft: Vec<PermissionEntry>,
}

impl PermissionMatrixEditor {
    /// Start an empty draft (new role) over the given universe
    pub fn new(universe: AvailableMenusResponse) -> Self {
        let mut groups: Vec<MenuGroup> =
            group_menus_by_module(&universe.menu_items, &universe.modules)
                .into_values()
                .collect();
        groups.sort_by_key(|group| group.module.sort_order);

        Self {
            universe,
            groups,
            draft: Vec::new(),
        }
    }

    /// Start a draft seeded from an existing role
    ///
    /// Records referencing menu items outside the universe (plan changed
    /// since the role was saved) are dropped from the draft; saving the
    /// role afterwards persists that drop, and nothing else touches them.
    pub fn for_role(universe: AvailableMenusResponse, role: &Role) -> Self {
        let mut editor = Self::new(universe);

        for record in &role.permissions {
            if editor.universe.menu_item(record.menu_item_id).is_none() {
                tracing::debug!(
                    role = %role.name,
                    menu_item_id = %record.menu_item_id,
                    "role permission references a menu item outside the plan, dropping from draft"
                );
                continue;
            }
            if record.flags.any() {
                editor.draft.push(PermissionEntry::from(record));
            }
        }

        editor
    }

    /// The matrix rows: modules (sorted) with their items (sorted)
    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// The current draft, pruned of all-false records
    pub fn permissions(&self) -> &[PermissionEntry] {
        &self.draft
    }

    /// The draft entry for a menu item, synthesized all-false when unset
    pub fn entry(&self, menu_item_id: Uuid) -> PermissionEntry {
        permission_for_item(&self.draft, menu_item_id)
    }

    // ==================== Toggles ====================

    /// Flip one flag on one menu item, with the view cascades applied
    ///
    /// Unknown menu items (outside the universe) are ignored.
    pub fn toggle_item(&mut self, menu_item_id: Uuid, action: PermissionAction) {
        if self.universe.menu_item(menu_item_id).is_none() {
            tracing::debug!(%menu_item_id, "toggle on unknown menu item ignored");
            return;
        }

        let mut entry = self.take_entry(menu_item_id);
        entry.flags.toggle(action);
        self.put_entry(entry);
    }

    /// Module-level bulk toggle for one action column
    ///
    /// If every item in the module already has the flag, the column turns
    /// off; otherwise it turns fully on. Mixed state always converges to
    /// on, never to a different mixed state.
    pub fn toggle_module(&mut self, module_id: Uuid, action: PermissionAction) {
        let item_ids: Vec<Uuid> = self
            .module_items(module_id)
            .map(|item| item.id)
            .collect();
        if item_ids.is_empty() {
            return;
        }

        let all_on = item_ids
            .iter()
            .all(|id| self.entry(*id).flags.grants(action));

        for id in item_ids {
            let mut entry = self.take_entry(id);
            if all_on {
                entry.flags.disable(action);
            } else {
                entry.flags.enable(action);
            }
            self.put_entry(entry);
        }
    }

    // ==================== Aggregates ====================

    /// Tri-state of one (module, action) column
    pub fn module_state(&self, module_id: Uuid, action: PermissionAction) -> TriState {
        let mut total = 0usize;
        let mut granted = 0usize;
        for item in self.module_items(module_id) {
            total += 1;
            if self.entry(item.id).flags.grants(action) {
                granted += 1;
            }
        }

        if total == 0 || granted == 0 {
            TriState::Off
        } else if granted == total {
            TriState::On
        } else {
            TriState::Partial
        }
    }

    /// Every item in the module has the flag (aggregate checkbox checked)
    pub fn is_module_enabled(&self, module_id: Uuid, action: PermissionAction) -> bool {
        self.module_state(module_id, action) == TriState::On
    }

    /// Strictly some-but-not-all items have the flag (indeterminate mark)
    pub fn is_module_partial(&self, module_id: Uuid, action: PermissionAction) -> bool {
        self.module_state(module_id, action) == TriState::Partial
    }

    // ==================== Submission ====================

    /// Build the create payload from the draft
    pub fn create_payload(&self, name: impl Into<String>, description: Option<String>) -> RoleCreate {
        RoleCreate {
            name: name.into(),
            description,
            permissions: self.draft.clone(),
        }
    }

    /// Build the update payload from the draft
    ///
    /// The permission list always replaces the role's previous one
    /// wholesale; name/description travel only when changed.
    pub fn update_payload(&self, name: Option<String>, description: Option<String>) -> RoleUpdate {
        RoleUpdate {
            name,
            description,
            permissions: Some(self.draft.clone()),
        }
    }

    /// Create a new role from the draft
    ///
    /// On failure the draft is untouched (the editor is not consumed) and
    /// the typed error carries the service's message for display.
    pub async fn submit_create(
        &self,
        api: &dyn PermissionsApi,
        name: impl Into<String>,
        description: Option<String>,
    ) -> ClientResult<Role> {
        api.create_role(&self.create_payload(name, description)).await
    }

    /// Save the draft over an existing role
    pub async fn submit_update(
        &self,
        api: &dyn PermissionsApi,
        role_id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> ClientResult<Role> {
        api.update_role(role_id, &self.update_payload(name, description))
            .await
    }

    // ==================== Internals ====================

    fn module_items(&self, module_id: Uuid) -> impl Iterator<Item = &MenuItem> {
        self.universe
            .menu_items
            .iter()
            .filter(move |item| item.module_id == module_id)
    }

    /// Remove and return the draft entry for an item (synthesized if absent)
    fn take_entry(&mut self, menu_item_id: Uuid) -> PermissionEntry {
        match self
            .draft
            .iter()
            .position(|entry| entry.menu_item_id == menu_item_id)
        {
            Some(index) => self.draft.swap_remove(index),
            None => PermissionEntry::empty(menu_item_id),
        }
    }

    /// Insert an entry back, pruning it when all flags are false
    fn put_entry(&mut self, entry: PermissionEntry) {
        if entry.flags.any() {
            self.draft.push(entry);
        }
    }
}
