// helm-client/tests/client_integration.rs
// Offline integration tests: construction, payload shapes, validation.

use helm_client::{ClientConfig, ClientError, HttpClient, PermissionsApi};
use shared::models::{PermissionEntry, PermissionFlags, RoleCreate};
use uuid::Uuid;

#[test]
fn test_client_from_config() {
    let client = ClientConfig::new("https://erp.example.com")
        .with_token("session-token")
        .build_http_client();

    assert_eq!(client.token(), Some("session-token"));
}

#[test]
fn test_role_create_wire_shape() {
    // The submission payload must carry flags flat on each record,
    // exactly as the service's role endpoints expect.
    let item = Uuid::new_v4();
    let mut flags = PermissionFlags::none();
    flags.enable(shared::PermissionAction::Edit);

    let payload = RoleCreate {
        name: "Invoicing".to_string(),
        description: Some("AR clerks".to_string()),
        permissions: vec![PermissionEntry {
            menu_item_id: item,
            flags,
        }],
    };

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["name"], "Invoicing");
    let record = &json["permissions"][0];
    assert_eq!(record["menu_item_id"], item.to_string());
    assert_eq!(record["can_view"], true);
    assert_eq!(record["can_edit"], true);
    assert_eq!(record["can_create"], false);
    assert!(record.get("flags").is_none());
}

#[tokio::test]
async fn test_create_role_rejects_invalid_name_before_sending() {
    // Points at nothing; validation fails client-side so no request goes out.
    let client = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9"));

    let payload = RoleCreate {
        name: String::new(),
        description: None,
        permissions: vec![],
    };

    match client.create_role(&payload).await {
        Err(ClientError::Validation(msg)) => assert!(msg.contains("name")),
        other => panic!("expected validation error, got {other:?}"),
    }
}
