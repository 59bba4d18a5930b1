#![allow(dead_code)]
// Shared test fixtures: an in-memory PermissionsApi and universe builders.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use helm_client::{ClientError, ClientResult, PermissionsApi};
use shared::client::{AvailableMenusResponse, UserMenuPermission, UserPermissionsResponse};
use shared::models::{
    MenuItem, Module, PermissionFlags, Role, RoleCreate, RolePermission, RoleUpdate,
    SubscriptionPlan,
};

// ==================== Universe builders ====================

pub fn module(code: &str, sort_order: i32) -> Module {
    Module {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: code.to_string(),
        description: None,
        icon: Some("shield".to_string()),
        sort_order,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn menu_item(parent: &Module, code: &str, permission_key: &str, sort_order: i32) -> MenuItem {
    MenuItem {
        id: Uuid::new_v4(),
        module_id: parent.id,
        code: code.to_string(),
        name: code.to_string(),
        description: None,
        route: Some(format!("/{code}")),
        permission_key: permission_key.to_string(),
        icon: Some("list".to_string()),
        sort_order,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn universe(modules: Vec<Module>, menu_items: Vec<MenuItem>) -> AvailableMenusResponse {
    AvailableMenusResponse {
        current_plan: "professional".to_string(),
        plan_name: "Professional Plan".to_string(),
        modules,
        menu_items,
    }
}

pub fn grant(item: &MenuItem, flags: PermissionFlags) -> UserMenuPermission {
    UserMenuPermission {
        menu_item_id: item.id,
        permission_key: item.permission_key.clone(),
        flags,
    }
}

pub fn view() -> PermissionFlags {
    PermissionFlags::view_only()
}

pub fn record(role_id: Uuid, menu_item_id: Uuid, flags: PermissionFlags) -> RolePermission {
    RolePermission {
        id: Uuid::new_v4(),
        role_id,
        menu_item_id,
        flags,
        created_at: Utc::now(),
        updated_at: None,
    }
}

pub fn role_with(permissions: Vec<RolePermission>) -> Role {
    Role {
        id: Uuid::new_v4(),
        tenant_id: Some(Uuid::new_v4()),
        name: "Warehouse".to_string(),
        description: None,
        is_system: false,
        permissions,
        created_at: Utc::now(),
        updated_at: None,
    }
}

// ==================== Fake API ====================

/// In-memory permission service with failure/delay knobs
pub struct FakeApi {
    pub menus: Mutex<AvailableMenusResponse>,
    pub permissions: Mutex<UserPermissionsResponse>,
    pub fetch_delay: Mutex<Option<Duration>>,
    pub fail_fetch: AtomicBool,
    pub fetch_calls: AtomicUsize,
    pub save_error: Mutex<Option<(u16, String)>>,
    pub created: Mutex<Vec<RoleCreate>>,
    pub updated: Mutex<Vec<(Uuid, RoleUpdate)>>,
}

impl FakeApi {
    pub fn new(menus: AvailableMenusResponse, permissions: Vec<UserMenuPermission>) -> Self {
        Self {
            menus: Mutex::new(menus),
            permissions: Mutex::new(UserPermissionsResponse { permissions }),
            fetch_delay: Mutex::new(None),
            fail_fetch: AtomicBool::new(false),
            fetch_calls: AtomicUsize::new(0),
            save_error: Mutex::new(None),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(universe(vec![], vec![]), vec![])
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.fetch_delay.lock().unwrap() = Some(delay);
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn reject_saves(&self, status: u16, message: &str) {
        *self.save_error.lock().unwrap() = Some((status, message.to_string()));
    }

    async fn pause(&self) {
        let delay = *self.fetch_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn save_gate(&self) -> ClientResult<()> {
        if let Some((status, message)) = self.save_error.lock().unwrap().clone() {
            return Err(ClientError::Api { status, message });
        }
        Ok(())
    }

    fn materialize(&self, id: Uuid, name: &str, entries: &[shared::models::PermissionEntry]) -> Role {
        Role {
            id,
            tenant_id: Some(Uuid::new_v4()),
            name: name.to_string(),
            description: None,
            is_system: false,
            permissions: entries
                .iter()
                .map(|entry| record(id, entry.menu_item_id, entry.flags))
                .collect(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[async_trait]
impl PermissionsApi for FakeApi {
    async fn available_menus(&self) -> ClientResult<AvailableMenusResponse> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ClientError::Api {
                status: 503,
                message: "permission service unavailable".to_string(),
            });
        }
        Ok(self.menus.lock().unwrap().clone())
    }

    async fn user_permissions(&self) -> ClientResult<UserPermissionsResponse> {
        self.pause().await;
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ClientError::Api {
                status: 503,
                message: "permission service unavailable".to_string(),
            });
        }
        Ok(self.permissions.lock().unwrap().clone())
    }

    async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        Ok(Vec::new())
    }

    async fn get_role(&self, _id: Uuid) -> ClientResult<Role> {
        Err(ClientError::Api {
            status: 404,
            message: "Role not found".to_string(),
        })
    }

    async fn create_role(&self, payload: &RoleCreate) -> ClientResult<Role> {
        self.save_gate()?;
        let role = self.materialize(Uuid::new_v4(), &payload.name, &payload.permissions);
        self.created.lock().unwrap().push(payload.clone());
        Ok(role)
    }

    async fn update_role(&self, id: Uuid, payload: &RoleUpdate) -> ClientResult<Role> {
        self.save_gate()?;
        let entries = payload.permissions.clone().unwrap_or_default();
        let name = payload.name.clone().unwrap_or_else(|| "Warehouse".to_string());
        let role = self.materialize(id, &name, &entries);
        self.updated.lock().unwrap().push((id, payload.clone()));
        Ok(role)
    }

    async fn delete_role(&self, _id: Uuid) -> ClientResult<()> {
        self.save_gate()
    }

    async fn subscription_plans(&self) -> ClientResult<Vec<SubscriptionPlan>> {
        Ok(Vec::new())
    }

    async fn modules(&self) -> ClientResult<Vec<Module>> {
        Ok(self.menus.lock().unwrap().modules.clone())
    }

    async fn menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        Ok(self.menus.lock().unwrap().menu_items.clone())
    }
}
