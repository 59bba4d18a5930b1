//! Subscription Plan Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subscription plan entity
///
/// The tenant's plan bounds which menu items exist for that tenant; the
/// backend filters the available-menus response by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price_monthly: Option<Decimal>,
    pub price_yearly: Option<Decimal>,
    pub is_active: bool,
    pub sort_order: i32,
}
