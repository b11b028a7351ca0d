use pterodactyl_core::config::PanelTarget;
use pterodactyl_core::uuid::{BackupUuid, ServerUuid};
use serde_json::{json, Value};
use wiremock::MockServer;

use crate::models::Server;

pub(crate) const API_KEY: &str = "ptlc_test_key";

pub(crate) fn test_target(server: &MockServer) -> PanelTarget {
    PanelTarget::new(server.uri(), API_KEY).unwrap()
}

pub(crate) fn server_json(uuid: ServerUuid) -> Value {
    let identifier: String = uuid.to_string().chars().take(8).collect();
    json!({
        "object": "server",
        "attributes": {
            "server_owner": true,
            "identifier": identifier,
            "internal_id": 7,
            "uuid": uuid,
            "name": "Survival",
            "node": "node-01",
            "description": "",
            "limits": {"memory": 2048, "swap": 0, "disk": 10240, "io": 500, "cpu": 200},
            "feature_limits": {"databases": 2, "allocations": 1, "backups": 5},
            "is_suspended": false,
            "is_installing": false,
            "is_transferring": false
        }
    })
}

pub(crate) fn backup_json(uuid: BackupUuid, completed_at: Option<&str>) -> Value {
    json!({
        "object": "backup",
        "attributes": {
            "uuid": uuid,
            "is_successful": completed_at.is_some(),
            "is_locked": false,
            "name": "nightly",
            "ignored_files": [],
            "checksum": null,
            "bytes": 0,
            "created_at": "2024-03-01T10:00:00+00:00",
            "completed_at": completed_at
        }
    })
}

pub(crate) fn sample_server() -> Server {
    serde_json::from_value(server_json(ServerUuid::new_v4())).unwrap()
}
