//! Canvas REST API HTTP client.

use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{Error, Result};

/// Minimum download size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Canvas API client carrying the base URL and bearer token.
pub struct CanvasApi {
    client: Client,
    base_url: Url,
    token: String,
}

impl CanvasApi {
    /// Create a new API client against `base_url` (e.g.
    /// `https://inst.instructure.com/api/v1/`).
    pub fn new(base_url: &str, token: String) -> Result<Self> {
        // A trailing slash is required for endpoint joining.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)?;

        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Resolve an endpoint path against the configured base URL.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Make an authenticated GET request, failing on any non-2xx status.
    async fn get(&self, url: Url, query: Option<&[(&str, &str)]>) -> Result<Response> {
        tracing::info!("Fetching {}", url);

        let mut request = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response)
    }

    /// Fetch the complete result set of a listing endpoint, following
    /// `rel="next"` pagination links from the `Link` response header.
    ///
    /// Query parameters apply to the first request only; next links are
    /// self-contained.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut results = Vec::new();
        let mut next_url = Some(self.endpoint_url(endpoint)?);
        let mut query = Some(query);

        while let Some(url) = next_url.take() {
            let response = self.get(url.clone(), query.take()).await?;

            let next = response
                .headers()
                .get(header::LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let text = response.text().await?;
            let page: Vec<T> = serde_json::from_str(&text).map_err(|e| {
                Error::Api(format!("Failed to parse listing from {}: {}", url, e))
            })?;
            results.extend(page);

            next_url = match next {
                Some(link) => Some(Url::parse(&link)?),
                None => None,
            };
        }

        Ok(results)
    }

    /// Fetch a single structured object from a non-listing endpoint.
    pub async fn fetch_one<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        let response = self.get(url.clone(), None).await?;

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Api(format!("Failed to parse object from {}: {}", url, e)))
    }

    /// Stream a remote resource to `dest` in chunks.
    ///
    /// `dest`'s parent directory must already exist. No temp-file rename:
    /// an interrupted stream leaves a partial file behind.
    pub async fn download_file(&self, file_url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(file_url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let content_length = response.content_length();
        let progress = if content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false) {
            let pb = ProgressBar::new(content_length.unwrap_or(0));
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut file = File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            if chunk.is_empty() {
                continue;
            }
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if let Some(ref pb) = progress {
                pb.set_position(downloaded);
            }
        }

        file.flush().await?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(())
    }
}

/// Extract the `rel="next"` target from an RFC 5988 `Link` header value.
pub fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;

        let is_next = params.split(';').any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            return None;
        }

        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        Some(target.to_string())
    })
}
