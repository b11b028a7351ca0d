//! Asynchronous panel client: request construction, response decoding and resource accessors.

use crate::models::{Backup, BackupList, BackupRequest, Server, ServerList};
use crate::Result;
use pterodactyl_core::client::ClientConfig;
use pterodactyl_core::config::PanelTarget;
use pterodactyl_core::form::FormFields;
use pterodactyl_core::uuid::BackupUuid;
use pterodactyl_core::{ApiErrors, Error};
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Path prefix of every client API endpoint.
pub const API_PREFIX: &str = "api";
/// Endpoint listing the servers visible to the API key.
pub const ENDPOINT_SERVERS: &str = "client";
/// Endpoint prefix for a single server.
pub const ENDPOINT_SERVER: &str = "client/servers";
/// Path segment of a server's backups.
pub const ENDPOINT_BACKUPS: &str = "backups";
/// Path segment resolving a backup's signed download URL.
pub const ENDPOINT_DOWNLOAD: &str = "download";

pub(crate) const JSON: &str = "application/json";

/// Join the panel base URL, the API prefix, an endpoint and its path segments.
///
/// A trailing slash on `base` is dropped so every part is separated by exactly one `/`.
#[must_use]
pub fn build_api_url(base: &str, endpoint: &str, segments: &[&str]) -> String {
    let mut url = format!("{}/{API_PREFIX}/{endpoint}", base.trim_end_matches('/'));
    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }
    url
}

/// Builder for [`PanelClient`].
#[derive(Debug, Clone, Default)]
pub struct PanelClientBuilder {
    http_config: ClientConfig,
}

impl PanelClientBuilder {
    /// Create a builder with default HTTP settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the HTTP client configuration used when building the client.
    #[must_use]
    pub fn with_http_config(mut self, http_config: ClientConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Finalise the builder and create the [`PanelClient`].
    pub fn build(self) -> Result<PanelClient> {
        let config = self.http_config;

        let mut builder = ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|err| {
            Error::ConfigError(format!("Failed to build panel HTTP client: {err}"))
        })?;

        Ok(PanelClient { http })
    }
}

/// Asynchronous client for the panel's client API.
///
/// The client holds only the connection pool. The panel and credential are passed to every
/// call as a [`PanelTarget`], so one client can serve any number of panels.
#[derive(Debug, Clone)]
pub struct PanelClient {
    pub(crate) http: Client,
}

impl PanelClient {
    /// Construct a client with default HTTP settings.
    pub fn new() -> Result<Self> {
        PanelClientBuilder::new().build()
    }

    /// Start a builder.
    #[must_use]
    pub fn builder() -> PanelClientBuilder {
        PanelClientBuilder::new()
    }

    /// List the servers the API key can access.
    ///
    /// Fails with [`Error::NoServersReturned`] when the panel answers successfully but omits
    /// the collection.
    pub async fn list_servers(&self, target: &PanelTarget) -> Result<Vec<Server>> {
        let servers: ServerList = self
            .call_api(target, Method::GET, ENDPOINT_SERVERS, &[], None)
            .await?;

        servers.data.ok_or(Error::NoServersReturned)
    }

    /// Fetch a server by UUID or short identifier.
    pub async fn get_server(&self, target: &PanelTarget, server_id: &str) -> Result<Server> {
        self.call_api(target, Method::GET, ENDPOINT_SERVER, &[server_id], None)
            .await
    }

    /// List the backups of a server.
    ///
    /// Fails with [`Error::NoBackupsReturned`] when the panel answers successfully but omits
    /// the collection.
    pub async fn list_backups(
        &self,
        target: &PanelTarget,
        server: &Server,
    ) -> Result<Vec<Backup>> {
        let server_id = server.uuid().to_string();
        let backups: BackupList = self
            .call_api(
                target,
                Method::GET,
                ENDPOINT_SERVER,
                &[&server_id, ENDPOINT_BACKUPS],
                None,
            )
            .await?;

        backups.data.ok_or(Error::NoBackupsReturned)
    }

    /// Fetch a single backup.
    pub async fn get_backup(
        &self,
        target: &PanelTarget,
        server: &Server,
        backup: BackupUuid,
    ) -> Result<Backup> {
        let server_id = server.uuid().to_string();
        let backup_id = backup.to_string();
        self.call_api(
            target,
            Method::GET,
            ENDPOINT_SERVER,
            &[&server_id, ENDPOINT_BACKUPS, &backup_id],
            None,
        )
        .await
    }

    /// Delete a backup, returning the record as the panel reported it.
    pub async fn delete_backup(
        &self,
        target: &PanelTarget,
        server: &Server,
        backup: BackupUuid,
    ) -> Result<Backup> {
        let server_id = server.uuid().to_string();
        let backup_id = backup.to_string();
        self.call_api(
            target,
            Method::DELETE,
            ENDPOINT_SERVER,
            &[&server_id, ENDPOINT_BACKUPS, &backup_id],
            None,
        )
        .await
    }

    /// Ask the panel to start a new backup. The returned record is not yet completed.
    pub async fn request_backup(
        &self,
        target: &PanelTarget,
        server: &Server,
        request: &BackupRequest,
    ) -> Result<Backup> {
        let server_id = server.uuid().to_string();
        let form = request.to_form();
        self.call_api(
            target,
            Method::POST,
            ENDPOINT_SERVER,
            &[&server_id, ENDPOINT_BACKUPS],
            form.as_ref(),
        )
        .await
    }

    /// Issue one authenticated request against the panel and decode the JSON answer.
    ///
    /// Any status other than `200 OK` is decoded as an [`ApiErrors`] payload and returned as
    /// [`Error::Api`]. Nothing is retried.
    pub async fn call_api<T>(
        &self,
        target: &PanelTarget,
        method: Method,
        endpoint: &str,
        segments: &[&str],
        form: Option<&FormFields>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(&build_api_url(target.base_url(), endpoint, segments))?;

        debug!(%method, url = %url, "Sending panel request");

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON)
            .bearer_auth(target.api_key().expose_secret());

        if let Some(fields) = form {
            request = request.form(fields.pairs());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            let errors: ApiErrors = serde_json::from_slice(&body).map_err(|err| {
                Error::ParseError(format!(
                    "Failed to parse panel error response ({status}) for `{endpoint}`: {err}"
                ))
            })?;
            warn!(%status, endpoint, %errors, "Panel request failed");
            return Err(Error::Api(errors));
        }

        serde_json::from_slice(&body).map_err(|err| {
            Error::ParseError(format!(
                "Failed to parse panel response for `{endpoint}`: {err}"
            ))
        })
    }
}
