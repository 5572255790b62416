use serde_json::json;
use statewatch_core::report::{OrphanedStateFile, OrphanedStateFileReport};

#[test]
fn entry_serializes_with_key_and_url_fields() {
    let entry = OrphanedStateFile {
        key: "a/b/gone/terraform.tfstate".to_string(),
        url: "https://example.com/console".to_string(),
    };

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        json!({
            "key": "a/b/gone/terraform.tfstate",
            "url": "https://example.com/console",
        })
    );
}

#[test]
fn report_envelope_carries_timestamp_and_entries() {
    let report = OrphanedStateFileReport {
        updated_at: "2020-04-20T00:00:00Z".parse().unwrap(),
        orphaned_statefiles: vec![OrphanedStateFile {
            key: "a/b/gone/terraform.tfstate".to_string(),
            url: "https://example.com/console".to_string(),
        }],
    };

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["updated_at"], "2020-04-20T00:00:00Z");
    assert_eq!(value["orphaned_statefiles"].as_array().unwrap().len(), 1);
    assert_eq!(
        value["orphaned_statefiles"][0]["key"],
        "a/b/gone/terraform.tfstate"
    );
}

#[test]
fn report_round_trips_through_json() {
    let report = OrphanedStateFileReport {
        updated_at: "2020-04-20T00:00:00Z".parse().unwrap(),
        orphaned_statefiles: Vec::new(),
    };

    let text = serde_json::to_string(&report).unwrap();
    let back: OrphanedStateFileReport = serde_json::from_str(&text).unwrap();
    assert!(back.orphaned_statefiles.is_empty());
    assert_eq!(back.updated_at, report.updated_at);
}
