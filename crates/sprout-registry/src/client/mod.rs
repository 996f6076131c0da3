//! HTTP client for the npm registry's search and metadata endpoints

use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use sprout_core::error::SproutError;

use crate::api::{PackageMetadataResponse, SearchResults};
use crate::RegistryResult;

/// Tuning parameters for a search request.
///
/// A zero value means "not set" and omits the parameter from the query
/// string, so an explicit zero weight cannot be requested; the registry's
/// own defaults apply instead.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Number of results to return
    pub size: u32,
    /// Pagination offset
    pub from: u32,
    /// Quality weight
    pub quality: f32,
    /// Popularity weight
    pub popularity: f32,
    /// Maintenance weight
    pub maintenance: f32,
}

impl SearchOptions {
    /// Render the non-zero parameters as query pairs.
    ///
    /// Weights are formatted with six digits after the decimal point.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.size != 0 {
            params.push(("size", self.size.to_string()));
        }
        if self.from != 0 {
            params.push(("from", self.from.to_string()));
        }
        if self.quality != 0.0 {
            params.push(("quality", format!("{:.6}", self.quality)));
        }
        if self.popularity != 0.0 {
            params.push(("popularity", format!("{:.6}", self.popularity)));
        }
        if self.maintenance != 0.0 {
            params.push(("maintenance", format!("{:.6}", self.maintenance)));
        }
        params
    }
}

/// Main HTTP client for npm registry operations
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client with connection pooling
    client: Client,
    /// Base registry URL
    base_url: String,
}

impl RegistryClient {
    /// Create new registry client with connection pooling
    pub fn new() -> RegistryResult<Self> {
        let client = ClientBuilder::new()
            // Connection pooling configuration
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(Duration::from_secs(90))
            // Request timeout
            .timeout(Duration::from_secs(30))
            // Enable gzip compression
            .gzip(true)
            // User agent
            .user_agent(concat!("sprout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SproutError::transport(format!("Failed to create HTTP client: {}", e), e)
            })?;

        Ok(Self {
            client,
            base_url: "https://registry.npmjs.org".to_string(),
        })
    }

    /// Search the registry for packages matching `term`.
    ///
    /// `term` is sent URL-encoded as the `text` query parameter; non-zero
    /// fields of `options` are appended per [`SearchOptions::query_params`].
    pub async fn search(
        &self,
        term: &str,
        options: &SearchOptions,
    ) -> RegistryResult<SearchResults> {
        let url = format!("{}/-/v1/search", self.base_url);
        let mut params = vec![("text", term.to_string())];
        params.extend(options.query_params());

        let request = self.client.get(&url).query(&params);
        self.execute(request, &url).await
    }

    /// Fetch the full metadata document for `name`.
    ///
    /// Scoped package names must already be in the registry's encoded form
    /// (`@scope%2fname`); the name is embedded in the path as-is.
    pub async fn fetch_package(&self, name: &str) -> RegistryResult<PackageMetadataResponse> {
        let url = format!("{}/{}", self.base_url, name);
        let request = self.client.get(&url);
        self.execute(request, &url).await
    }

    /// Send a GET request and decode the JSON body.
    ///
    /// Only HTTP 200 counts as success; any other status surfaces as
    /// `UnexpectedStatus`. The body is read in full before decoding so a
    /// malformed payload yields `Decode` rather than a transport failure.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> RegistryResult<T> {
        debug!(url, "sending registry request");

        let response = request
            .send()
            .await
            .map_err(|e| SproutError::transport(format!("Failed to reach registry: {}", e), e))?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "registry responded");

        if status != StatusCode::OK {
            return Err(SproutError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SproutError::transport(format!("Failed to read response body: {}", e), e))?;

        serde_json::from_str(&body)
            .map_err(|e| SproutError::decode(format!("Failed to parse response as JSON: {}", e), e))
    }
}
