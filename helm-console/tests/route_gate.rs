// Route gate state machine against a live session store.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FakeApi, grant, menu_item, module, universe, view};
use helm_console::{GateResolution, GateState, PermissionSessionStore, RouteGate};
use shared::PermissionAction;

fn store_with_view_on_orders() -> (Arc<FakeApi>, PermissionSessionStore) {
    let sales = module("sales", 1);
    let orders = menu_item(&sales, "sales_sales_order", "sales.orders.view", 1);
    let api = Arc::new(FakeApi::new(
        universe(vec![sales], vec![orders.clone()]),
        vec![grant(&orders, view())],
    ));
    let store = PermissionSessionStore::new(api.clone());
    (api, store)
}

#[tokio::test]
async fn test_gate_stays_loading_until_store_settles() {
    let (api, store) = store_with_view_on_orders();
    api.set_delay(Duration::from_millis(40));

    let mut gate = RouteGate::new("sales.orders.view", PermissionAction::View);
    assert_eq!(gate.evaluate(&store), GateState::Loading);
    assert_eq!(gate.resolution(), GateResolution::Placeholder);

    let background = store.clone();
    let handle = tokio::spawn(async move { background.initialize().await });
    tokio::time::sleep(Duration::from_millis(5)).await;

    // Mid-fetch: still loading, never optimistically granted.
    assert_eq!(gate.evaluate(&store), GateState::Loading);

    handle.await.unwrap().unwrap();
    assert_eq!(gate.evaluate(&store), GateState::Granted);
    assert_eq!(gate.resolution(), GateResolution::Content);
}

#[tokio::test]
async fn test_gate_denies_missing_permission() {
    let (_api, store) = store_with_view_on_orders();
    store.initialize().await.unwrap();

    let mut gate = RouteGate::new("sales.orders.view", PermissionAction::Delete);
    assert_eq!(gate.evaluate(&store), GateState::Denied);
    assert_eq!(gate.resolution(), GateResolution::Fallback);
}

#[tokio::test]
async fn test_gate_denies_on_fetch_failure() {
    let api = Arc::new(FakeApi::empty());
    api.set_fail_fetch(true);
    let store = PermissionSessionStore::new(api);
    let _ = store.initialize().await;

    let mut gate = RouteGate::new("sales.orders.view", PermissionAction::View)
        .with_redirect("/forbidden");
    assert_eq!(gate.evaluate(&store), GateState::Denied);
    assert_eq!(
        gate.resolution(),
        GateResolution::Redirect("/forbidden".to_string())
    );
}

#[tokio::test]
async fn test_denied_is_terminal_for_the_mount() {
    let (api, store) = store_with_view_on_orders();

    // First load carries no grants at all.
    let granted = {
        let mut perms = api.permissions.lock().unwrap();
        std::mem::take(&mut perms.permissions)
    };
    store.initialize().await.unwrap();

    let mut gate = RouteGate::new("sales.orders.view", PermissionAction::View);
    assert_eq!(gate.evaluate(&store), GateState::Denied);

    // Permissions arrive on refresh, but this mount stays denied.
    api.permissions.lock().unwrap().permissions = granted;
    store.refresh().await.unwrap();
    assert!(store.can_view("sales.orders.view"));
    assert_eq!(gate.evaluate(&store), GateState::Denied);

    // A fresh mount re-enters loading and resolves against the new data.
    let mut remounted = RouteGate::new("sales.orders.view", PermissionAction::View);
    assert_eq!(remounted.evaluate(&store), GateState::Granted);
}
