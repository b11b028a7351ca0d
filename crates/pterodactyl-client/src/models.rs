//! Panel client API models.
//!
//! The panel wraps every resource in an `{object, attributes}` envelope and every collection
//! in an `{object, data, meta}` envelope. Collections keep `data` optional so that a response
//! omitting it can be told apart from an empty list.

use chrono::{DateTime, Utc};
use pterodactyl_core::form::FormFields;
use pterodactyl_core::uuid::{BackupUuid, ServerUuid};
use serde::{Deserialize, Serialize};

/// A server the API key has access to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Server {
    /// Resource type tag (`server`).
    #[serde(default)]
    pub object: String,
    /// Server attributes.
    pub attributes: ServerAttributes,
}

impl Server {
    /// UUID used to address the server's backups.
    #[must_use]
    pub const fn uuid(&self) -> ServerUuid {
        self.attributes.uuid
    }
}

/// Attributes of a [`Server`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerAttributes {
    /// Server UUID.
    pub uuid: ServerUuid,
    /// Short identifier (first segment of the UUID).
    #[serde(default)]
    pub identifier: String,
    /// Panel-internal numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<u64>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Node hosting the server.
    #[serde(default)]
    pub node: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the API key owner owns the server.
    #[serde(default)]
    pub server_owner: bool,
    /// Whether the server is suspended.
    #[serde(default)]
    pub is_suspended: bool,
    /// Whether the server is still installing.
    #[serde(default)]
    pub is_installing: bool,
    /// Whether the server is being transferred between nodes.
    #[serde(default)]
    pub is_transferring: bool,
    /// Docker image the server runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    /// Resource limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ServerLimits>,
    /// Feature limits, including the backup quota.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_limits: Option<FeatureLimits>,
}

/// Resource limits of a server. Values are MiB or percent as reported by the panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerLimits {
    /// Memory in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,
    /// Swap in MiB (`-1` for unlimited).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap: Option<i64>,
    /// Disk in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<i64>,
    /// Block IO weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io: Option<i64>,
    /// CPU percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
}

/// Feature limits of a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureLimits {
    /// Maximum number of databases.
    #[serde(default)]
    pub databases: u32,
    /// Maximum number of allocations.
    #[serde(default)]
    pub allocations: u32,
    /// Maximum number of backups.
    #[serde(default)]
    pub backups: u32,
}

/// A backup of a server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Backup {
    /// Resource type tag (`backup`).
    #[serde(default)]
    pub object: String,
    /// Backup attributes.
    pub attributes: BackupAttributes,
}

impl Backup {
    /// Backup UUID.
    #[must_use]
    pub const fn uuid(&self) -> BackupUuid {
        self.attributes.uuid
    }

    /// Completion timestamp, `None` while the panel is still producing the archive.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.attributes.completed_at
    }

    /// Whether the panel has finished the backup.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.attributes.completed_at.is_some()
    }
}

/// Attributes of a [`Backup`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupAttributes {
    /// Backup UUID.
    pub uuid: BackupUuid,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Patterns excluded from the archive.
    #[serde(default)]
    pub ignored_files: Vec<String>,
    /// Archive checksum, known once completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Archive size in bytes.
    #[serde(default)]
    pub bytes: u64,
    /// Whether the backup finished successfully.
    #[serde(default)]
    pub is_successful: bool,
    /// Whether the backup is locked against deletion.
    #[serde(default)]
    pub is_locked: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Completion timestamp.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Collection envelope returned by `GET client`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerList {
    /// Resource type tag (`list`).
    #[serde(default)]
    pub object: String,
    /// Servers, absent when the panel omitted the collection.
    #[serde(default)]
    pub data: Option<Vec<Server>>,
    /// Pagination metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

/// Collection envelope returned by `GET client/servers/{uuid}/backups`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BackupList {
    /// Resource type tag (`list`).
    #[serde(default)]
    pub object: String,
    /// Backups, absent when the panel omitted the collection.
    #[serde(default)]
    pub data: Option<Vec<Backup>>,
    /// Pagination metadata and backup count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

/// Metadata attached to collection responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListMeta {
    /// Pagination details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Number of backups counted against the server's limit (backup listings only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_count: Option<u32>,
}

/// Pagination details of a collection response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of items.
    #[serde(default)]
    pub total: u64,
    /// Items in this page.
    #[serde(default)]
    pub count: u64,
    /// Page size.
    #[serde(default)]
    pub per_page: u64,
    /// Current page (1-based).
    #[serde(default)]
    pub current_page: u64,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: u64,
}

/// Signed, time-limited URL for downloading a backup archive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedUrl {
    /// Resource type tag (`signed_url`).
    #[serde(default)]
    pub object: String,
    /// URL attributes.
    pub attributes: SignedUrlAttributes,
}

/// Attributes of a [`SignedUrl`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedUrlAttributes {
    /// The pre-authorized download URL.
    pub url: String,
}

/// Options for a new backup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupRequest {
    /// Backup name; the panel generates one when unset.
    pub name: Option<String>,
    /// Patterns to exclude from the archive.
    pub ignored: Vec<String>,
    /// Lock the backup against deletion.
    pub is_locked: Option<bool>,
}

impl BackupRequest {
    /// Create a request that lets the panel pick every option.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backup name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add an ignore pattern.
    #[must_use]
    pub fn with_ignored(mut self, pattern: impl Into<String>) -> Self {
        self.ignored.push(pattern.into());
        self
    }

    /// Lock or unlock the backup.
    #[must_use]
    pub const fn locked(mut self, locked: bool) -> Self {
        self.is_locked = Some(locked);
        self
    }

    /// Convert the options into form fields, `None` when nothing is set.
    #[must_use]
    pub fn to_form(&self) -> Option<FormFields> {
        let mut fields = FormFields::new();
        fields.push_opt("name", self.name.as_deref());
        if !self.ignored.is_empty() {
            fields.push("ignored", self.ignored.join("\n"));
        }
        fields.push_opt("is_locked", self.is_locked.map(u8::from));

        if fields.is_empty() {
            None
        } else {
            Some(fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backup_pending_until_completed_at_set() {
        let uuid = BackupUuid::new_v4();
        let pending: Backup = serde_json::from_value(json!({
            "object": "backup",
            "attributes": {
                "uuid": uuid,
                "name": "nightly",
                "completed_at": null
            }
        }))
        .unwrap();
        assert!(!pending.is_completed());
        assert_eq!(pending.uuid(), uuid);

        let completed: Backup = serde_json::from_value(json!({
            "object": "backup",
            "attributes": {
                "uuid": uuid,
                "completed_at": "2024-03-01T10:15:00+00:00"
            }
        }))
        .unwrap();
        assert!(completed.is_completed());
        assert_eq!(
            completed.completed_at().unwrap().to_rfc3339(),
            "2024-03-01T10:15:00+00:00"
        );
    }

    #[test]
    fn list_distinguishes_absent_from_empty() {
        let absent: BackupList = serde_json::from_value(json!({"object": "list"})).unwrap();
        assert!(absent.data.is_none());

        let null: BackupList =
            serde_json::from_value(json!({"object": "list", "data": null})).unwrap();
        assert!(null.data.is_none());

        let empty: BackupList =
            serde_json::from_value(json!({"object": "list", "data": []})).unwrap();
        assert_eq!(empty.data, Some(Vec::new()));
    }

    #[test]
    fn default_backup_request_has_no_body() {
        assert!(BackupRequest::new().to_form().is_none());
    }

    #[test]
    fn backup_request_form_fields() {
        let form = BackupRequest::new()
            .with_name("before-update")
            .with_ignored("*.log")
            .with_ignored("cache/")
            .locked(true)
            .to_form()
            .unwrap();

        assert_eq!(
            form.pairs(),
            &[
                ("name", "before-update".to_string()),
                ("ignored", "*.log\ncache/".to_string()),
                ("is_locked", "1".to_string()),
            ]
        );
    }
}
