//! Integration tests for parsing panel responses.
//!
//! These tests validate that the pterodactyl-client models deserialize responses shaped like
//! the ones a panel returns, including fields the models do not map.

use pterodactyl_client::models::{BackupList, ServerList, SignedUrl};
use pterodactyl_client::{ApiErrors, BackupUuid, Error, ServerUuid};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_server_list() {
    let json_data = load_fixture("server_list.json");
    let list: ServerList = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize server list: {e}"));

    let servers = list.data.expect("server list should carry a collection");
    assert_eq!(servers.len(), 2);

    let survival = &servers[0];
    assert_eq!(
        survival.uuid(),
        ServerUuid::parse_str("d3aac109-e5a0-4331-b03e-3454f7e136dc").unwrap()
    );
    assert_eq!(survival.attributes.identifier, "d3aac109");
    assert_eq!(survival.attributes.internal_id, Some(1));
    assert!(survival.attributes.server_owner);

    let limits = survival.attributes.limits.as_ref().unwrap();
    assert_eq!(limits.memory, Some(4096));
    assert_eq!(
        survival.attributes.feature_limits.as_ref().unwrap().backups,
        10
    );

    let creative = &servers[1];
    assert!(creative.attributes.is_suspended);
    assert_eq!(creative.attributes.limits.as_ref().unwrap().swap, Some(-1));

    let pagination = list.meta.unwrap().pagination.unwrap();
    assert_eq!(pagination.total, 2);
    assert_eq!(pagination.per_page, 50);
}

#[test]
fn test_deserialize_backup_list() {
    let json_data = load_fixture("backup_list.json");
    let list: BackupList = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize backup list: {e}"));

    assert_eq!(list.meta.as_ref().unwrap().backup_count, Some(2));

    let backups = list.data.expect("backup list should carry a collection");
    assert_eq!(backups.len(), 2);

    let completed = &backups[0];
    assert_eq!(
        completed.uuid(),
        BackupUuid::parse_str("904df120-a66f-4375-a4d0-2ba3a2a5c4a5").unwrap()
    );
    assert!(completed.is_completed());
    assert!(completed.attributes.is_locked);
    assert_eq!(completed.attributes.bytes, 1_458_291_023);
    assert_eq!(completed.attributes.ignored_files, vec!["*.log", "cache/"]);
    assert_eq!(
        completed.completed_at().unwrap().to_rfc3339(),
        "2024-02-29T23:04:51+00:00"
    );

    let pending = &backups[1];
    assert!(!pending.is_completed());
    assert!(pending.attributes.checksum.is_none());
    assert!(pending.attributes.created_at.is_some());
}

#[test]
fn test_deserialize_signed_url() {
    let json_data = load_fixture("signed_url.json");
    let signed: SignedUrl = serde_json::from_str(&json_data).unwrap();

    assert_eq!(signed.object, "signed_url");
    assert!(signed
        .attributes
        .url
        .starts_with("https://node-eu-1.panel.example.com:8080/download/backup?token="));
}

#[test]
fn test_error_payload_message_lists_all_errors() {
    let json_data = load_fixture("error.json");
    let errors: ApiErrors = serde_json::from_str(&json_data).unwrap();
    assert_eq!(errors.errors.len(), 2);

    let message = Error::Api(errors).to_string();
    assert!(message.starts_with("api call failed with errors: "));
    assert!(message.contains("TooManyBackupsException: Cannot create a new backup"));
    assert!(message.contains("ThrottleRequestsException: Too many requests, please slow down."));
}
