// Pin the wire shapes of the bus contract: the popup and background
// scripts parse these payloads structurally, so field names and tag
// values are load-bearing.

use serde_json::json;
use table_exporter_wasm::api::{Ack, Notification, Request};
use table_exporter_wasm::{StructureKind, TableMeta};

#[test]
fn test_requests_parse_from_their_tagged_payloads() {
    let get: Request = serde_json::from_value(json!({"type": "get_tables"})).unwrap();
    assert_eq!(get, Request::GetTables);

    let export: Request =
        serde_json::from_value(json!({"type": "export_table", "id": "table-0"})).unwrap();
    assert_eq!(
        export,
        Request::ExportTable {
            id: "table-0".to_string()
        }
    );

    let grid: Request =
        serde_json::from_value(json!({"type": "export_grid", "id": "grid-17"})).unwrap();
    assert_eq!(
        grid,
        Request::ExportGrid {
            id: "grid-17".to_string()
        }
    );

    let enable: Request = serde_json::from_value(json!({"type": "enable_selection_mode"})).unwrap();
    assert_eq!(enable, Request::EnableSelectionMode);
}

#[test]
fn test_unknown_request_types_fail_to_parse() {
    assert!(serde_json::from_value::<Request>(json!({"type": "explode"})).is_err());
    assert!(serde_json::from_value::<Request>(json!({"id": "table-0"})).is_err());
}

#[test]
fn test_ack_omits_absent_error() {
    assert_eq!(
        serde_json::to_value(Ack::ok()).unwrap(),
        json!({"success": true})
    );
    assert_eq!(
        serde_json::to_value(Ack::fail("No grid selected")).unwrap(),
        json!({"success": false, "error": "No grid selected"})
    );
}

#[test]
fn test_table_meta_kind_serializes_as_the_type_field() {
    let native = TableMeta {
        id: "table-0".to_string(),
        rows: 2,
        cols: 3,
        preview: "A | B".to_string(),
        kind: StructureKind::Native,
    };
    assert_eq!(
        serde_json::to_value(&native).unwrap(),
        json!({"id": "table-0", "rows": 2, "cols": 3, "preview": "A | B", "type": "table"})
    );

    let adhoc = TableMeta {
        kind: StructureKind::AdHoc,
        id: "grid-1700000000000".to_string(),
        ..native
    };
    assert_eq!(
        serde_json::to_value(&adhoc).unwrap()["type"],
        json!("non-table")
    );
}

#[test]
fn test_notifications_carry_their_event_tags() {
    let grid = TableMeta {
        id: "grid-1".to_string(),
        rows: 2,
        cols: 2,
        preview: "a | 1".to_string(),
        kind: StructureKind::AdHoc,
    };
    let selected = serde_json::to_value(Notification::GridSelected { grid }).unwrap();
    assert_eq!(selected["type"], json!("grid_selected"));
    assert_eq!(selected["grid"]["type"], json!("non-table"));

    assert_eq!(
        serde_json::to_value(Notification::SelectionModeEnabled).unwrap(),
        json!({"type": "selection_mode_enabled"})
    );
    assert_eq!(
        serde_json::to_value(Notification::SelectionModeDisabled).unwrap(),
        json!({"type": "selection_mode_disabled"})
    );
    assert_eq!(
        serde_json::to_value(Notification::ClearBadge).unwrap(),
        json!({"type": "clear_badge"})
    );
}
