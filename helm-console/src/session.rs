//! Permission session store
//!
//! The single source of truth for "what can the current user see and do"
//! during one console session. Fetches the tenant's available menus and
//! the user's effective permissions once, caches them, and answers point
//! queries for gates, navigation, and permission-aware widgets.
//!
//! Concurrency contract:
//! - the two constituent fetches are joined and committed as one atomic
//!   replacement; consumers never observe menus from one fetch paired
//!   with permissions from another
//! - concurrent `initialize`/`refresh` callers attach to the same
//!   in-flight request instead of issuing duplicates
//! - every fetch carries a monotonically increasing sequence number and
//!   commits only while it is still the latest issued, so a slow stale
//!   response can never overwrite a newer one
//! - while loading or after a failure every permission answer is `false`
//!   (fail-closed); access is only ever granted from committed data

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::Mutex;

use helm_client::{ClientError, PermissionsApi};
use shared::client::{AvailableMenusResponse, UserPermissionsResponse};
use shared::models::{MenuItem, Module, PermissionAction, PermissionFlags};
use uuid::Uuid;

/// Session-level error: the client error reduced to what the UI needs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SessionError {
    pub message: String,
    pub status: Option<u16>,
}

impl From<&ClientError> for SessionError {
    fn from(err: &ClientError) -> Self {
        Self {
            message: err.user_message(),
            status: err.status(),
        }
    }
}

type SharedFetch = Shared<BoxFuture<'static, Result<(), SessionError>>>;

/// Committed session data, replaced wholesale on every successful fetch
#[derive(Debug)]
struct LoadedPermissions {
    plan_code: String,
    plan_name: String,
    modules: Vec<Module>,
    menu_items: Vec<MenuItem>,
    /// Effective flags per menu item, reduced by per-flag OR
    by_item: HashMap<Uuid, PermissionFlags>,
    /// Menu item ids per permission key (duplicates resolve permissively)
    by_key: HashMap<String, Vec<Uuid>>,
}

impl LoadedPermissions {
    fn build(menus: AvailableMenusResponse, perms: UserPermissionsResponse) -> Self {
        let item_ids: HashSet<Uuid> = menus.menu_items.iter().map(|item| item.id).collect();

        // Explicit union reduction. The service already merges across
        // roles, but re-reducing keeps duplicates harmless and makes the
        // single-role case identical to the many-role case.
        let mut by_item: HashMap<Uuid, PermissionFlags> = HashMap::new();
        for perm in perms.permissions {
            if !item_ids.contains(&perm.menu_item_id) {
                tracing::debug!(
                    menu_item_id = %perm.menu_item_id,
                    key = %perm.permission_key,
                    "permission references a menu item outside the plan, ignoring"
                );
                continue;
            }
            by_item
                .entry(perm.menu_item_id)
                .and_modify(|flags| *flags = flags.union(&perm.flags))
                .or_insert(perm.flags);
        }

        let mut by_key: HashMap<String, Vec<Uuid>> = HashMap::new();
        for item in &menus.menu_items {
            by_key
                .entry(item.permission_key.clone())
                .or_default()
                .push(item.id);
        }

        Self {
            plan_code: menus.current_plan,
            plan_name: menus.plan_name,
            modules: menus.modules,
            menu_items: menus.menu_items,
            by_item,
            by_key,
        }
    }

    fn grants(&self, permission_key: &str, action: PermissionAction) -> bool {
        let Some(item_ids) = self.by_key.get(permission_key) else {
            return false;
        };
        item_ids.iter().any(|id| {
            self.by_item
                .get(id)
                .map(|flags| flags.grants(action))
                .unwrap_or(false)
        })
    }
}

#[derive(Debug, Default)]
struct SessionState {
    loading: bool,
    error: Option<SessionError>,
    data: Option<LoadedPermissions>,
    version: u64,
}

struct StoreInner {
    api: Arc<dyn PermissionsApi>,
    state: RwLock<SessionState>,
    inflight: Mutex<Option<SharedFetch>>,
    /// Sequence of the most recently issued fetch
    seq: AtomicU64,
}

/// Session-scoped permission cache
///
/// Construct one per console session and hand clones to consumers; all
/// clones share the same cache. Mutation happens only through
/// [`initialize`](Self::initialize), [`refresh`](Self::refresh), and
/// [`dispose`](Self::dispose).
#[derive(Clone)]
pub struct PermissionSessionStore {
    inner: Arc<StoreInner>,
}

impl PermissionSessionStore {
    pub fn new(api: Arc<dyn PermissionsApi>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                api,
                state: RwLock::new(SessionState::default()),
                inflight: Mutex::new(None),
                seq: AtomicU64::new(0),
            }),
        }
    }

    // ==================== Lifecycle ====================

    /// Load session data if it has never been loaded
    ///
    /// Cached data (or a cached failure) short-circuits; the store never
    /// retries on its own. Concurrent callers share one request.
    pub async fn initialize(&self) -> Result<(), SessionError> {
        {
            let state = self.inner.state.read().unwrap();
            if state.data.is_some() {
                return Ok(());
            }
            if let Some(err) = &state.error {
                if !state.loading {
                    return Err(err.clone());
                }
            }
        }
        self.ensure_fetch().await
    }

    /// Re-fetch and atomically replace the cached session data
    ///
    /// Attaches to an already in-flight fetch instead of issuing a
    /// duplicate request.
    pub async fn refresh(&self) -> Result<(), SessionError> {
        self.ensure_fetch().await
    }

    /// Drop all cached data at session end
    ///
    /// Any still-running fetch is superseded and will not commit.
    pub async fn dispose(&self) {
        self.inner.seq.fetch_add(1, Ordering::SeqCst);
        *self.inner.inflight.lock().await = None;

        let mut state = self.inner.state.write().unwrap();
        state.loading = false;
        state.error = None;
        state.data = None;
        state.version += 1;
        tracing::debug!("permission session disposed");
    }

    // ==================== Queries (fail-closed) ====================

    /// Whether the current user may perform `action` on any menu item
    /// carrying `permission_key`
    pub fn has_permission(&self, permission_key: &str, action: PermissionAction) -> bool {
        let state = self.inner.state.read().unwrap();
        state
            .data
            .as_ref()
            .map(|data| data.grants(permission_key, action))
            .unwrap_or(false)
    }

    pub fn can_view(&self, permission_key: &str) -> bool {
        self.has_permission(permission_key, PermissionAction::View)
    }

    pub fn can_create(&self, permission_key: &str) -> bool {
        self.has_permission(permission_key, PermissionAction::Create)
    }

    pub fn can_edit(&self, permission_key: &str) -> bool {
        self.has_permission(permission_key, PermissionAction::Edit)
    }

    pub fn can_delete(&self, permission_key: &str) -> bool {
        self.has_permission(permission_key, PermissionAction::Delete)
    }

    pub fn can_export(&self, permission_key: &str) -> bool {
        self.has_permission(permission_key, PermissionAction::Export)
    }

    /// Menu items the user has view access to; what navigation renders
    pub fn available_menu_items(&self) -> Vec<MenuItem> {
        let state = self.inner.state.read().unwrap();
        let Some(data) = state.data.as_ref() else {
            return Vec::new();
        };
        data.menu_items
            .iter()
            .filter(|item| {
                data.by_item
                    .get(&item.id)
                    .map(|flags| flags.can_view)
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// The plan's module list (empty until loaded)
    pub fn modules(&self) -> Vec<Module> {
        let state = self.inner.state.read().unwrap();
        state
            .data
            .as_ref()
            .map(|data| data.modules.clone())
            .unwrap_or_default()
    }

    /// The tenant's current plan code, once loaded
    pub fn current_plan(&self) -> Option<String> {
        let state = self.inner.state.read().unwrap();
        state.data.as_ref().map(|data| data.plan_code.clone())
    }

    /// The tenant's current plan display name, once loaded
    pub fn plan_name(&self) -> Option<String> {
        let state = self.inner.state.read().unwrap();
        state.data.as_ref().map(|data| data.plan_name.clone())
    }

    // ==================== Status ====================

    /// A fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.inner.state.read().unwrap().loading
    }

    /// Session data has been committed
    pub fn is_loaded(&self) -> bool {
        self.inner.state.read().unwrap().data.is_some()
    }

    /// The last fetch failure, if the store holds no data
    pub fn error(&self) -> Option<SessionError> {
        self.inner.state.read().unwrap().error.clone()
    }

    /// Bumped on every commit, failure, and dispose; consumers that derive
    /// from the store (navigation, gates) recompute when this changes
    pub fn version(&self) -> u64 {
        self.inner.state.read().unwrap().version
    }

    // ==================== Fetch machinery ====================

    /// Join the in-flight fetch, or start one
    async fn ensure_fetch(&self) -> Result<(), SessionError> {
        let fetch = {
            let mut inflight = self.inner.inflight.lock().await;
            match inflight.as_ref() {
                // A settled fetch left in the slot is not "in flight";
                // joining it would skip the re-fetch the caller asked for.
                Some(fetch) if fetch.peek().is_none() => fetch.clone(),
                _ => {
                    let fetch = self.start_fetch();
                    *inflight = Some(fetch.clone());
                    fetch
                }
            }
        };

        let result = fetch.await;

        // Release the slot once the fetch it holds has settled
        let mut inflight = self.inner.inflight.lock().await;
        if inflight
            .as_ref()
            .map(|fetch| fetch.peek().is_some())
            .unwrap_or(false)
        {
            *inflight = None;
        }

        result
    }

    /// Issue a new fetch with the next sequence number
    ///
    /// The returned future commits into the store only if its sequence is
    /// still the latest when both responses arrive.
    fn start_fetch(&self) -> SharedFetch {
        let seq = self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.write().unwrap().loading = true;

        let inner = self.inner.clone();
        async move {
            tracing::debug!(seq, "fetching permission session data");
            let fetched = tokio::try_join!(inner.api.available_menus(), inner.api.user_permissions());

            let mut state = inner.state.write().unwrap();
            if inner.seq.load(Ordering::SeqCst) != seq {
                // A newer request was issued while this one was in flight;
                // its result wins and this one is dropped on the floor.
                tracing::debug!(seq, "discarding superseded permission fetch");
                return Ok(());
            }

            match fetched {
                Ok((menus, perms)) => {
                    tracing::info!(
                        seq,
                        plan = %menus.current_plan,
                        menu_items = menus.menu_items.len(),
                        "permission session loaded"
                    );
                    state.data = Some(LoadedPermissions::build(menus, perms));
                    state.error = None;
                    state.loading = false;
                    state.version += 1;
                    Ok(())
                }
                Err(err) => {
                    let session_err = SessionError::from(&err);
                    tracing::warn!(seq, error = %session_err, "permission session fetch failed");
                    state.data = None;
                    state.error = Some(session_err.clone());
                    state.loading = false;
                    state.version += 1;
                    Err(session_err)
                }
            }
        }
        .boxed()
        .shared()
    }
}
