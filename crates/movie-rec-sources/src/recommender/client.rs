use async_trait::async_trait;
use movie_rec_models::MovieSummary;
use reqwest::Client;
use std::time::Duration;

use crate::error::SourceError;
use crate::http::build_client;
use crate::recommender::api;
use crate::traits::RecommenderSource;

/// HTTP client for the recommendation service.
#[derive(Clone)]
pub struct RecommenderClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RecommenderClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into(),
            token,
        }
    }
}

#[async_trait]
impl RecommenderSource for RecommenderClient {
    async fn recommend(
        &self,
        user_input: &str,
        user_id: u64,
    ) -> Result<Vec<MovieSummary>, SourceError> {
        api::recommend(
            &self.client,
            &self.base_url,
            self.token.as_deref(),
            user_input,
            user_id,
        )
        .await
    }
}
