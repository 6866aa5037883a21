use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::SourceError;
use crate::http::build_client;
use crate::traits::PosterProbe;

/// Load probe against the TMDB image CDN. A probe fetches the asset and
/// discards the body; any non-2xx or transport failure means the asset
/// is unavailable and the caller falls back to its placeholder.
#[derive(Clone)]
pub struct TmdbImageClient {
    client: Client,
}

impl TmdbImageClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
        }
    }
}

#[async_trait]
impl PosterProbe for TmdbImageClient {
    async fn probe(&self, url: &str) -> Result<(), SourceError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status, url));
        }
        // Drain the body so the transfer completes end to end.
        response.bytes().await?;
        Ok(())
    }
}
