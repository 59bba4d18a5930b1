// Matrix editor invariants: view implication, cascades, pruning, module
// aggregates, and the submission round trip.

mod common;

use common::{FakeApi, menu_item, module, record, role_with, universe};
use helm_console::{PermissionMatrixEditor, TriState};
use shared::PermissionAction;
use shared::client::AvailableMenusResponse;
use shared::models::{MenuItem, Module, PermissionFlags};

fn sales_universe() -> (AvailableMenusResponse, Module, Vec<MenuItem>) {
    let sales = module("sales", 1);
    let items = vec![
        menu_item(&sales, "sales_sales_quotation", "sales.quotations.view", 1),
        menu_item(&sales, "sales_sales_order", "sales.orders.view", 2),
        menu_item(&sales, "sales_sales_invoice", "sales.invoices.view", 3),
    ];
    (
        universe(vec![sales.clone()], items.clone()),
        sales,
        items,
    )
}

#[test]
fn test_dependent_flags_always_imply_view() {
    let (universe, sales, items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);

    // An arbitrary toggle sequence; the implication holds after each step.
    let steps = [
        (items[0].id, PermissionAction::Edit),
        (items[1].id, PermissionAction::View),
        (items[0].id, PermissionAction::View),
        (items[2].id, PermissionAction::Export),
        (items[1].id, PermissionAction::Delete),
        (items[2].id, PermissionAction::View),
        (items[0].id, PermissionAction::Create),
    ];
    for (item, action) in steps {
        editor.toggle_item(item, action);
        for entry in editor.permissions() {
            assert!(
                entry.flags.is_consistent(),
                "dependent flag without view after toggling {action} on {item}"
            );
        }
    }

    // Same holds across module-level bulk toggles.
    editor.toggle_module(sales.id, PermissionAction::Export);
    for entry in editor.permissions() {
        assert!(entry.flags.is_consistent());
    }
}

#[test]
fn test_revoking_view_clears_dependents_immediately() {
    let (universe, _sales, items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);
    let invoice = items[2].id;

    editor.toggle_item(invoice, PermissionAction::Edit);
    editor.toggle_item(invoice, PermissionAction::Export);
    let before = editor.entry(invoice).flags;
    assert!(before.can_view && before.can_edit && before.can_export);

    // One step: view off takes the dependents with it, and the now-empty
    // record disappears from the draft.
    editor.toggle_item(invoice, PermissionAction::View);
    assert!(editor.permissions().is_empty());
    assert_eq!(editor.entry(invoice).flags, PermissionFlags::none());
}

#[test]
fn test_no_all_false_record_survives_any_operation() {
    let (universe, sales, items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);

    editor.toggle_item(items[0].id, PermissionAction::View);
    editor.toggle_item(items[0].id, PermissionAction::View);
    editor.toggle_module(sales.id, PermissionAction::View);
    editor.toggle_module(sales.id, PermissionAction::View);

    assert!(editor.permissions().iter().all(|entry| entry.flags.any()));
    assert!(editor.permissions().is_empty());
}

#[test]
fn test_module_aggregate_states() {
    let (universe, sales, items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);

    assert_eq!(
        editor.module_state(sales.id, PermissionAction::View),
        TriState::Off
    );

    // 1 of 3: partial, not enabled.
    editor.toggle_item(items[0].id, PermissionAction::View);
    assert_eq!(
        editor.module_state(sales.id, PermissionAction::View),
        TriState::Partial
    );
    assert!(editor.is_module_partial(sales.id, PermissionAction::View));
    assert!(!editor.is_module_enabled(sales.id, PermissionAction::View));

    // 3 of 3: enabled, not partial.
    editor.toggle_item(items[1].id, PermissionAction::View);
    editor.toggle_item(items[2].id, PermissionAction::View);
    assert!(editor.is_module_enabled(sales.id, PermissionAction::View));
    assert!(!editor.is_module_partial(sales.id, PermissionAction::View));
}

#[test]
fn test_partial_module_toggle_converges_to_all_on() {
    let (universe, sales, items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);

    // Mixed: one item already has export.
    editor.toggle_item(items[1].id, PermissionAction::Export);
    assert_eq!(
        editor.module_state(sales.id, PermissionAction::Export),
        TriState::Partial
    );

    // One bulk toggle lands everything on the "on" side; nothing flips off.
    editor.toggle_module(sales.id, PermissionAction::Export);
    assert_eq!(
        editor.module_state(sales.id, PermissionAction::Export),
        TriState::On
    );
    // Export forced view on for every item too.
    assert!(editor.is_module_enabled(sales.id, PermissionAction::View));

    // A second bulk toggle turns the column off (view stays).
    editor.toggle_module(sales.id, PermissionAction::Export);
    assert_eq!(
        editor.module_state(sales.id, PermissionAction::Export),
        TriState::Off
    );
    assert!(editor.is_module_enabled(sales.id, PermissionAction::View));
}

#[test]
fn test_bulk_view_off_prunes_module_records() {
    let (universe, sales, _items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);

    editor.toggle_module(sales.id, PermissionAction::View);
    assert_eq!(editor.permissions().len(), 3);

    editor.toggle_module(sales.id, PermissionAction::View);
    assert!(editor.permissions().is_empty());
}

#[test]
fn test_submission_round_trip() {
    let (universe, _sales, items) = sales_universe();
    let invoice = items[2].id;
    let mut editor = PermissionMatrixEditor::new(universe);

    editor.toggle_item(invoice, PermissionAction::View);
    editor.toggle_item(invoice, PermissionAction::Edit);

    let payload = editor.create_payload("Invoicing", None);
    assert_eq!(payload.permissions.len(), 1);
    let entry = &payload.permissions[0];
    assert_eq!(entry.menu_item_id, invoice);
    assert!(entry.flags.can_view);
    assert!(entry.flags.can_edit);
    assert!(!entry.flags.can_create);
    assert!(!entry.flags.can_delete);
    assert!(!entry.flags.can_export);

    // Turning view back off leaves no trace of the item in the payload.
    editor.toggle_item(invoice, PermissionAction::View);
    let payload = editor.create_payload("Invoicing", None);
    assert!(payload.permissions.is_empty());
}

#[test]
fn test_seeding_from_role_drops_out_of_plan_records() {
    let (universe, _sales, items) = sales_universe();
    let role_id = uuid::Uuid::new_v4();

    let stale_item = uuid::Uuid::new_v4(); // not in the universe
    let role = role_with(vec![
        record(role_id, items[0].id, PermissionFlags::view_only()),
        record(role_id, stale_item, PermissionFlags::view_only()),
        record(role_id, items[1].id, PermissionFlags::none()), // empty row
    ]);

    let editor = PermissionMatrixEditor::for_role(universe, &role);

    assert_eq!(editor.permissions().len(), 1);
    assert_eq!(editor.permissions()[0].menu_item_id, items[0].id);
}

#[test]
fn test_toggle_outside_universe_is_ignored() {
    let (universe, _sales, _items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);

    editor.toggle_item(uuid::Uuid::new_v4(), PermissionAction::View);
    assert!(editor.permissions().is_empty());

    // Unknown module: no-op, Off aggregate.
    let ghost = uuid::Uuid::new_v4();
    editor.toggle_module(ghost, PermissionAction::View);
    assert_eq!(editor.module_state(ghost, PermissionAction::View), TriState::Off);
}

#[tokio::test]
async fn test_failed_save_keeps_draft_and_surfaces_message() {
    let (universe, _sales, items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);
    editor.toggle_item(items[0].id, PermissionAction::View);

    let api = FakeApi::empty();
    api.reject_saves(400, "Role 'Invoicing' already exists");

    let err = editor
        .submit_create(&api, "Invoicing", None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Role 'Invoicing' already exists");

    // Draft untouched: the admin's work is not lost.
    assert_eq!(editor.permissions().len(), 1);
}

#[tokio::test]
async fn test_successful_save_sends_pruned_draft() {
    let (universe, sales, _items) = sales_universe();
    let mut editor = PermissionMatrixEditor::new(universe);
    editor.toggle_module(sales.id, PermissionAction::View);

    let api = FakeApi::empty();
    let role = editor
        .submit_create(&api, "Sales Readonly", Some("View-only sales".to_string()))
        .await
        .unwrap();

    assert_eq!(role.permissions.len(), 3);
    let sent = api.created.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].permissions.iter().all(|entry| entry.flags.any()));
}
