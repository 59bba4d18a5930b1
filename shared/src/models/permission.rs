//! Permission Models
//!
//! Per-menu-item permission flags and the records that carry them.
//! The flag set encodes two invariants that hold everywhere in the
//! framework:
//!
//! 1. A dependent action (create/edit/delete/export) requires view access.
//!    Enabling a dependent flag forces `can_view` on.
//! 2. Revoking `can_view` revokes every dependent flag in the same step.
//!
//! Records with all five flags false are semantically "no access" and are
//! pruned before persistence; [`PermissionFlags::any`] is the check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the five gated actions on a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    View,
    Create,
    Edit,
    Delete,
    Export,
}

impl PermissionAction {
    /// All actions, in matrix column order
    pub const ALL: [PermissionAction; 5] = [
        PermissionAction::View,
        PermissionAction::Create,
        PermissionAction::Edit,
        PermissionAction::Delete,
        PermissionAction::Export,
    ];

    /// The wire/flag name for this action (e.g. `"can_view"`)
    pub const fn flag_name(&self) -> &'static str {
        match self {
            PermissionAction::View => "can_view",
            PermissionAction::Create => "can_create",
            PermissionAction::Edit => "can_edit",
            PermissionAction::Delete => "can_delete",
            PermissionAction::Export => "can_export",
        }
    }

    /// Whether this action depends on view access
    pub const fn requires_view(&self) -> bool {
        !matches!(self, PermissionAction::View)
    }
}

impl std::fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flag_name())
    }
}

/// The five per-menu-item permission flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_create: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub can_export: bool,
}

impl PermissionFlags {
    /// All flags off
    pub const fn none() -> Self {
        Self {
            can_view: false,
            can_create: false,
            can_edit: false,
            can_delete: false,
            can_export: false,
        }
    }

    /// View access only
    pub const fn view_only() -> Self {
        Self {
            can_view: true,
            can_create: false,
            can_edit: false,
            can_delete: false,
            can_export: false,
        }
    }

    /// Whether the given action is granted
    pub const fn grants(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::View => self.can_view,
            PermissionAction::Create => self.can_create,
            PermissionAction::Edit => self.can_edit,
            PermissionAction::Delete => self.can_delete,
            PermissionAction::Export => self.can_export,
        }
    }

    /// Whether any flag is set
    pub const fn any(&self) -> bool {
        self.can_view || self.can_create || self.can_edit || self.can_delete || self.can_export
    }

    /// Grant an action. Dependent actions force `can_view` on.
    pub fn enable(&mut self, action: PermissionAction) {
        match action {
            PermissionAction::View => self.can_view = true,
            PermissionAction::Create => self.can_create = true,
            PermissionAction::Edit => self.can_edit = true,
            PermissionAction::Delete => self.can_delete = true,
            PermissionAction::Export => self.can_export = true,
        }
        if action.requires_view() {
            self.can_view = true;
        }
    }

    /// Revoke an action. Revoking view cascades to every dependent flag.
    pub fn disable(&mut self, action: PermissionAction) {
        match action {
            PermissionAction::View => *self = Self::none(),
            PermissionAction::Create => self.can_create = false,
            PermissionAction::Edit => self.can_edit = false,
            PermissionAction::Delete => self.can_delete = false,
            PermissionAction::Export => self.can_export = false,
        }
    }

    /// Flip an action, applying the enable/disable cascades.
    /// Returns the new value of the flipped flag.
    pub fn toggle(&mut self, action: PermissionAction) -> bool {
        if self.grants(action) {
            self.disable(action);
            false
        } else {
            self.enable(action);
            true
        }
    }

    /// Per-flag OR. The effective-permission reduction across roles;
    /// idempotent, so a single-role union is well-defined.
    pub const fn union(&self, other: &Self) -> Self {
        Self {
            can_view: self.can_view || other.can_view,
            can_create: self.can_create || other.can_create,
            can_edit: self.can_edit || other.can_edit,
            can_delete: self.can_delete || other.can_delete,
            can_export: self.can_export || other.can_export,
        }
    }

    /// Invariant check: dependent actions imply view access
    pub const fn is_consistent(&self) -> bool {
        self.can_view || !(self.can_create || self.can_edit || self.can_delete || self.can_export)
    }
}

/// Role permission record as stored by the backend
///
/// One row per (role, menu item) pair. A row with all flags false is
/// equivalent to no row and never persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermission {
    pub id: Uuid,
    pub role_id: Uuid,
    pub menu_item_id: Uuid,
    #[serde(flatten)]
    pub flags: PermissionFlags,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Permission entry for role create/update payloads and editor drafts
///
/// The stripped form of [`RolePermission`]: just the menu item reference
/// and the flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    pub menu_item_id: Uuid,
    #[serde(flatten)]
    pub flags: PermissionFlags,
}

impl PermissionEntry {
    /// An all-false entry for the given menu item
    pub fn empty(menu_item_id: Uuid) -> Self {
        Self {
            menu_item_id,
            flags: PermissionFlags::none(),
        }
    }
}

impl From<&RolePermission> for PermissionEntry {
    fn from(record: &RolePermission) -> Self {
        Self {
            menu_item_id: record.menu_item_id,
            flags: record.flags,
        }
    }
}
