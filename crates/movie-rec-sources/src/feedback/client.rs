use async_trait::async_trait;
use movie_rec_models::{FeedbackHistory, FeedbackKind};
use reqwest::Client;
use std::time::Duration;

use crate::error::SourceError;
use crate::feedback::api;
use crate::http::build_client;
use crate::traits::FeedbackStore;

/// HTTP client for the feedback store.
#[derive(Clone)]
pub struct FeedbackClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl FeedbackClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into(),
            token,
        }
    }
}

#[async_trait]
impl FeedbackStore for FeedbackClient {
    async fn submit(
        &self,
        user_id: u64,
        movie_id: u64,
        kind: FeedbackKind,
    ) -> Result<(), SourceError> {
        api::submit_feedback(
            &self.client,
            &self.base_url,
            self.token.as_deref(),
            user_id,
            movie_id,
            kind,
        )
        .await
    }

    async fn history(&self, user_id: u64) -> Result<FeedbackHistory, SourceError> {
        api::fetch_history(&self.client, &self.base_url, self.token.as_deref(), user_id).await
    }

    async fn track_click(&self, user_id: u64, movie_id: u64) -> Result<(), SourceError> {
        api::track_click(
            &self.client,
            &self.base_url,
            self.token.as_deref(),
            user_id,
            movie_id,
        )
        .await
    }
}
