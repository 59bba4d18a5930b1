//! Helm Console - dashboard-side permission model
//!
//! The client-side half of role/menu access control for the admin console:
//!
//! - [`session::PermissionSessionStore`]: fetch-once session cache of the
//!   tenant's available menus and the user's effective permissions
//! - [`resolver`]: pure grouping/lookup utilities
//! - [`gate::RouteGate`]: loading/granted/denied gating for routes
//! - [`navigation`]: module-grouped navigation tree derivation
//! - [`editor::PermissionMatrixEditor`]: the role permission matrix editor
//! - [`icons`]: icon key resolution for menu rendering
//!
//! None of this is a security boundary. Every answer here is a rendering
//! hint; the permission service enforces access on every request.

pub mod editor;
pub mod gate;
pub mod icons;
pub mod navigation;
pub mod resolver;
pub mod session;

pub use editor::{PermissionMatrixEditor, TriState};
pub use gate::{GateResolution, GateState, RouteGate};
pub use navigation::NavigationView;
pub use resolver::{MenuGroup, group_menus_by_module, permission_for_item};
pub use session::{PermissionSessionStore, SessionError};
