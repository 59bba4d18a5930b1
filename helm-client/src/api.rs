//! Typed endpoint surface of the permission service
//!
//! [`PermissionsApi`] is the seam between the console and the network:
//! the session store and matrix editor only ever see this trait, so tests
//! substitute in-memory fakes and never touch the wire.

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use shared::client::{AvailableMenusResponse, UserPermissionsResponse};
use shared::models::{MenuItem, Module, Role, RoleCreate, RoleUpdate, SubscriptionPlan};

use crate::{ClientError, ClientResult, HttpClient};

/// Operations exposed by the permission service
#[async_trait]
pub trait PermissionsApi: Send + Sync {
    /// Menus available under the current tenant's subscription plan
    async fn available_menus(&self) -> ClientResult<AvailableMenusResponse>;

    /// The current user's effective per-menu-item permissions
    /// (already unioned across the user's roles)
    async fn user_permissions(&self) -> ClientResult<UserPermissionsResponse>;

    /// All roles for the current tenant, with embedded permissions
    async fn list_roles(&self) -> ClientResult<Vec<Role>>;

    /// A single role with its permissions
    async fn get_role(&self, id: Uuid) -> ClientResult<Role>;

    /// Create a role with its permission list
    async fn create_role(&self, payload: &RoleCreate) -> ClientResult<Role>;

    /// Update a role; a present `permissions` list replaces the old one
    async fn update_role(&self, id: Uuid, payload: &RoleUpdate) -> ClientResult<Role>;

    /// Delete a role (rejected by the service for system roles)
    async fn delete_role(&self, id: Uuid) -> ClientResult<()>;

    /// All active subscription plans
    async fn subscription_plans(&self) -> ClientResult<Vec<SubscriptionPlan>>;

    /// The full module catalog (unfiltered by plan)
    async fn modules(&self) -> ClientResult<Vec<Module>>;

    /// The full menu item catalog (unfiltered by plan)
    async fn menu_items(&self) -> ClientResult<Vec<MenuItem>>;
}

#[async_trait]
impl PermissionsApi for HttpClient {
    async fn available_menus(&self) -> ClientResult<AvailableMenusResponse> {
        self.get("permissions/available-menus").await
    }

    async fn user_permissions(&self) -> ClientResult<UserPermissionsResponse> {
        self.get("permissions/user-permissions").await
    }

    async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        self.get("permissions/roles").await
    }

    async fn get_role(&self, id: Uuid) -> ClientResult<Role> {
        self.get(&format!("permissions/roles/{}", id)).await
    }

    async fn create_role(&self, payload: &RoleCreate) -> ClientResult<Role> {
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        tracing::info!(role_name = %payload.name, "Creating role");
        self.post("permissions/roles", payload).await
    }

    async fn update_role(&self, id: Uuid, payload: &RoleUpdate) -> ClientResult<Role> {
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        tracing::info!(role_id = %id, "Updating role");
        self.put(&format!("permissions/roles/{}", id), payload).await
    }

    async fn delete_role(&self, id: Uuid) -> ClientResult<()> {
        tracing::info!(role_id = %id, "Deleting role");
        self.delete(&format!("permissions/roles/{}", id)).await
    }

    async fn subscription_plans(&self) -> ClientResult<Vec<SubscriptionPlan>> {
        self.get("permissions/subscription-plans").await
    }

    async fn modules(&self) -> ClientResult<Vec<Module>> {
        self.get("permissions/modules").await
    }

    async fn menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("permissions/menu-items").await
    }
}
