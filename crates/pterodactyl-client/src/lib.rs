//! Pterodactyl panel client.
//!
//! Provides typed models and an asynchronous client for the panel's client API: listing
//! servers, managing their backups, waiting for a backup to complete and downloading the
//! resulting archive.

#![deny(missing_docs)]

pub mod client;
pub mod download;
pub mod models;
pub mod wait;

#[cfg(test)]
mod test_support;

pub use client::{build_api_url, PanelClient, PanelClientBuilder};
pub use models::{
    Backup, BackupAttributes, BackupList, BackupRequest, ListMeta, Pagination, Server,
    ServerAttributes, ServerList, SignedUrl,
};
pub use pterodactyl_core::config::{BackupWaitConfig, PanelTarget};
pub use pterodactyl_core::uuid::{BackupUuid, ServerUuid};
pub use pterodactyl_core::{ApiErrors, Error};
pub use wait::{wait_until_completed, BackupLookup, ServerBackups};

/// Convenient result alias that reuses the shared panel error type.
pub type Result<T> = pterodactyl_core::Result<T>;
