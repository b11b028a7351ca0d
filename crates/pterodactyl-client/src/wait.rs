//! Waiting for backups to complete.
//!
//! A backup is pending while its completion timestamp is unset. The wait loop fetches the
//! backup, returns as soon as a read reports it completed, and otherwise sleeps a fixed
//! interval before fetching again. There is no attempt limit and no backoff; any failed fetch
//! ends the wait.

use crate::client::PanelClient;
use crate::models::{Backup, BackupRequest, Server};
use crate::Result;
use async_trait::async_trait;
use pterodactyl_core::config::{BackupWaitConfig, PanelTarget};
use pterodactyl_core::uuid::BackupUuid;
use tokio::time::sleep;
use tracing::{debug, info};

/// Source of backup status reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackupLookup: Send + Sync {
    /// Fetch the current state of a backup.
    async fn fetch_backup(&self, backup: BackupUuid) -> Result<Backup>;
}

/// The backups of one server on one panel.
#[derive(Debug, Clone, Copy)]
pub struct ServerBackups<'a> {
    client: &'a PanelClient,
    target: &'a PanelTarget,
    server: &'a Server,
}

impl<'a> ServerBackups<'a> {
    /// Bind a client to a panel and server.
    #[must_use]
    pub const fn new(client: &'a PanelClient, target: &'a PanelTarget, server: &'a Server) -> Self {
        Self {
            client,
            target,
            server,
        }
    }
}

#[async_trait]
impl BackupLookup for ServerBackups<'_> {
    async fn fetch_backup(&self, backup: BackupUuid) -> Result<Backup> {
        self.client.get_backup(self.target, self.server, backup).await
    }
}

/// Poll `lookup` until the backup reports a completion timestamp.
///
/// A backup that completes on the Nth read is fetched exactly N times. A configuration with
/// a zero poll interval is rejected before the first fetch.
pub async fn wait_until_completed<L>(
    lookup: &L,
    backup: BackupUuid,
    config: &BackupWaitConfig,
) -> Result<Backup>
where
    L: BackupLookup + ?Sized,
{
    config.ensure_valid()?;

    let interval = config.poll_interval();
    let mut polls: u64 = 0;

    loop {
        let current = lookup.fetch_backup(backup).await?;
        polls += 1;

        if current.is_completed() {
            debug!(%backup, polls, "Backup completed");
            return Ok(current);
        }

        debug!(%backup, polls, ?interval, "Waiting for backup...");
        sleep(interval).await;
    }
}

impl PanelClient {
    /// Wait until an existing backup completes.
    pub async fn wait_for_backup(
        &self,
        target: &PanelTarget,
        server: &Server,
        backup: BackupUuid,
        config: &BackupWaitConfig,
    ) -> Result<Backup> {
        let lookup = ServerBackups::new(self, target, server);
        wait_until_completed(&lookup, backup, config).await
    }

    /// Start a backup and wait until the panel reports it completed.
    pub async fn backup_and_wait(
        &self,
        target: &PanelTarget,
        server: &Server,
        request: &BackupRequest,
        config: &BackupWaitConfig,
    ) -> Result<Backup> {
        let created = self.request_backup(target, server, request).await?;
        info!(server = %server.uuid(), backup = %created.uuid(), "Backup requested");

        self.wait_for_backup(target, server, created.uuid(), config)
            .await
    }
}
