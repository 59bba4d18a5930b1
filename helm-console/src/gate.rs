//! Route access gate
//!
//! Small state machine guarding one protected route mount:
//! `Loading -> Granted | Denied`, latched. A denied gate stays denied for
//! the lifetime of the mount; a new mount constructs a new gate and
//! re-enters `Loading`. While loading, nothing protected is rendered.

use shared::models::PermissionAction;

use crate::session::PermissionSessionStore;

/// Gate lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Session data not settled yet; render a neutral placeholder
    Loading,
    /// Access confirmed; render the protected content
    Granted,
    /// Access denied (or unconfirmable); terminal for this mount
    Denied,
}

/// What the route should render for the current gate state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateResolution {
    /// Neutral skeleton/spinner, never protected content
    Placeholder,
    /// The protected children
    Content,
    /// The configured fallback node
    Fallback,
    /// Navigate away to this route
    Redirect(String),
}

/// Permission gate for one route mount
#[derive(Debug, Clone)]
pub struct RouteGate {
    permission_key: String,
    action: PermissionAction,
    redirect: Option<String>,
    state: GateState,
}

impl RouteGate {
    /// Gate on `(permission_key, action)`, rendering a fallback when denied
    pub fn new(permission_key: impl Into<String>, action: PermissionAction) -> Self {
        Self {
            permission_key: permission_key.into(),
            action,
            redirect: None,
            state: GateState::Loading,
        }
    }

    /// Redirect to `route` instead of rendering a fallback when denied
    pub fn with_redirect(mut self, route: impl Into<String>) -> Self {
        self.redirect = Some(route.into());
        self
    }

    /// Current state without re-evaluating
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Advance the gate against the store's current snapshot
    ///
    /// `Loading` resolves once the store has committed data (check the
    /// permission) or has settled on a fetch failure (deny: access cannot
    /// be confirmed). `Granted` and `Denied` are terminal.
    pub fn evaluate(&mut self, store: &PermissionSessionStore) -> GateState {
        if self.state != GateState::Loading {
            return self.state;
        }

        if store.is_loaded() {
            self.state = if store.has_permission(&self.permission_key, self.action) {
                GateState::Granted
            } else {
                tracing::debug!(
                    permission = %self.permission_key,
                    action = %self.action,
                    "route access denied"
                );
                GateState::Denied
            };
        } else if store.error().is_some() && !store.is_loading() {
            // Any fetch failure reads as "cannot confirm access".
            self.state = GateState::Denied;
        }

        self.state
    }

    /// What to render for the current state
    pub fn resolution(&self) -> GateResolution {
        match self.state {
            GateState::Loading => GateResolution::Placeholder,
            GateState::Granted => GateResolution::Content,
            GateState::Denied => match &self.redirect {
                Some(route) => GateResolution::Redirect(route.clone()),
                None => GateResolution::Fallback,
            },
        }
    }
}
