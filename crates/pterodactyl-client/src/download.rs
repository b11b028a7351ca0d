//! Backup archive downloads through signed URLs.

use crate::client::{PanelClient, ENDPOINT_BACKUPS, ENDPOINT_DOWNLOAD, ENDPOINT_SERVER, JSON};
use crate::models::{Server, SignedUrl};
use crate::Result;
use futures_util::StreamExt;
use pterodactyl_core::config::PanelTarget;
use pterodactyl_core::uuid::BackupUuid;
use pterodactyl_core::Error;
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};
use url::Url;

impl PanelClient {
    /// Resolve the signed download URL of a backup.
    pub async fn backup_download_url(
        &self,
        target: &PanelTarget,
        server: &Server,
        backup: BackupUuid,
    ) -> Result<SignedUrl> {
        let server_id = server.uuid().to_string();
        let backup_id = backup.to_string();
        self.call_api(
            target,
            Method::GET,
            ENDPOINT_SERVER,
            &[&server_id, ENDPOINT_BACKUPS, &backup_id, ENDPOINT_DOWNLOAD],
            None,
        )
        .await
    }

    /// Download a backup archive to `destination`, returning the number of bytes written.
    ///
    /// The archive is fetched from the signed URL without the bearer credential. The
    /// destination is created (or truncated) only once the signed URL answered `200 OK`; a
    /// failure while streaming the body can leave a truncated file behind.
    pub async fn download_backup(
        &self,
        target: &PanelTarget,
        server: &Server,
        backup: BackupUuid,
        destination: impl AsRef<Path>,
    ) -> Result<u64> {
        let destination = destination.as_ref();
        let signed = self.backup_download_url(target, server, backup).await?;
        let url = Url::parse(&signed.attributes.url)?;

        trace!(%backup, host = url.host_str().unwrap_or_default(), "Attempting to download backup");

        let response = self.http.get(url).header(ACCEPT, JSON).send().await?;
        let status = response.status();

        trace!(%backup, %status, "Signed URL responded");

        if status != StatusCode::OK {
            return Err(Error::DownloadFailed(status.as_u16()));
        }

        trace!(path = %destination.display(), "Creating backup file");
        let mut file = File::create(destination).await?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!(%backup, path = %destination.display(), bytes = written, "Backup downloaded");
        Ok(written)
    }
}
