//! HTTP client for the Arcjet API.

use std::sync::Arc;

use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

use super::error::ArcjetError;
use super::models::{Listing, Site, Team};
use crate::core::config::ArcjetConfig;
use crate::core::security::TypeId;

/// Read-only client for the Arcjet API.
///
/// Headers are fixed at construction from the startup configuration. Each
/// call performs exactly one request with no retries.
#[derive(Debug, Clone)]
pub struct ArcjetClient {
    http: Client,
    config: Arc<ArcjetConfig>,
}

impl ArcjetClient {
    /// Create a new client with the given configuration.
    pub fn new(config: Arc<ArcjetConfig>) -> Result<Self, ArcjetError> {
        let mut headers = HeaderMap::new();

        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| ArcjetError::client("Invalid user agent format"))?,
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        // A missing key still yields a cookie; the API rejects the request.
        let mut cookie = HeaderValue::from_str(&format!(
            "session={}",
            config.api_key.as_deref().unwrap_or_default()
        ))
        .map_err(|_| ArcjetError::client("Invalid API key format"))?;
        cookie.set_sensitive(true);
        headers.insert(header::COOKIE, cookie);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ArcjetError::client(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// List all teams visible to the configured session.
    pub async fn list_teams(&self) -> Listing<Team> {
        self.fetch_listing(&["v1", "teams"]).await
    }

    /// List all sites belonging to `team_id`.
    pub async fn list_sites(&self, team_id: &TypeId) -> Listing<Site> {
        let team_id = team_id.to_string();
        self.fetch_listing(&["v1", "teams", &team_id, "sites"]).await
    }

    /// Execute a GET request and decode the JSON body.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ArcjetError> {
        debug!("GET request");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ArcjetError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArcjetError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ArcjetError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| ArcjetError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Build an API URL by appending path segments to the configured base.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ArcjetError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ArcjetError::invalid_url(format!("{} cannot be a base", self.config.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_listing<T: DeserializeOwned>(&self, segments: &[&str]) -> Listing<T> {
        let result = match self.endpoint(segments) {
            Ok(url) => self.get::<Vec<T>>(url).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(items) => Listing::from(items),
            Err(e) => {
                error!("Error making Arcjet API request: {}", e);
                Listing::Failed
            }
        }
    }
}
