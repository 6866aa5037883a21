use std::sync::Arc;

use anyhow::{Context, Result};
use movie_rec_config::ImagesConfig;
use movie_rec_models::{DecoratedMovie, FeedbackHistory, FeedbackKind};
use movie_rec_sources::{FeedbackStore, RecommenderSource};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::posters::decorate;
use crate::preload::{PreloadReport, PreloadScheduler};
use crate::query::synthesize;
use crate::reconcile::reconcile;
use crate::submit::{self, SubmitResult};

/// One assembled result set, ready for presentation.
#[derive(Debug, Serialize)]
pub struct Feed {
    /// The query that was sent to the recommender.
    pub query: String,
    pub movies: Vec<DecoratedMovie>,
    /// False for cold starts and explicit searches.
    pub personalized: bool,
    /// True when the feedback history was unavailable and the movies
    /// carry no feedback annotations.
    pub degraded: bool,
    pub preload: PreloadReport,
}

/// Wires the full fetch pipeline: history, query synthesis, the
/// recommender call, poster decoration, best-effort preload, and
/// feedback reconciliation. Each stage hands a new value to the next;
/// nothing here holds mutable state between calls.
pub struct FeedEngine {
    recommender: Arc<dyn RecommenderSource>,
    feedback: Arc<dyn FeedbackStore>,
    preloader: Option<PreloadScheduler>,
    images: ImagesConfig,
}

impl FeedEngine {
    pub fn new(
        recommender: Arc<dyn RecommenderSource>,
        feedback: Arc<dyn FeedbackStore>,
        preloader: Option<PreloadScheduler>,
        images: ImagesConfig,
    ) -> Self {
        Self {
            recommender,
            feedback,
            preloader,
            images,
        }
    }

    /// The home feed: a query synthesized from the user's history. A
    /// missing history degrades to the cold-start query instead of
    /// failing.
    pub async fn personalized_feed(&self, user_id: u64) -> Result<Feed> {
        validate_user(user_id)?;

        let (history, degraded) = self.history_or_degraded(user_id).await;
        let query = synthesize(&history);
        let personalized = !history.is_empty();
        info!(
            "fetching {} recommendations for user {} with query '{}'",
            if personalized { "personalized" } else { "cold-start" },
            user_id,
            query
        );

        self.assemble(user_id, query, personalized, history, degraded)
            .await
    }

    /// An explicit search. An empty query is rejected before any
    /// network traffic.
    pub async fn search_feed(&self, user_id: u64, query: &str) -> Result<Feed> {
        validate_user(user_id)?;

        let query = query.trim();
        if query.is_empty() {
            anyhow::bail!("search query cannot be empty");
        }

        let (history, degraded) = self.history_or_degraded(user_id).await;
        self.assemble(user_id, query.to_string(), false, history, degraded)
            .await
    }

    /// One feedback action against a live result set; see
    /// [`submit::submit_feedback`] for the outcome semantics.
    pub async fn submit_feedback(
        &self,
        user_id: u64,
        movies: Vec<DecoratedMovie>,
        movie_id: u64,
        kind: FeedbackKind,
    ) -> SubmitResult {
        submit::submit_feedback(self.feedback.as_ref(), user_id, movies, movie_id, kind).await
    }

    /// Best-effort click tracking; never fails.
    pub async fn record_click(&self, user_id: u64, movie_id: u64) {
        submit::record_click(self.feedback.as_ref(), user_id, movie_id).await
    }

    /// The raw feedback history, newest first.
    pub async fn history(&self, user_id: u64) -> Result<FeedbackHistory> {
        validate_user(user_id)?;
        let mut history = self
            .feedback
            .history(user_id)
            .await
            .context("feedback history request failed")?;
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }

    async fn assemble(
        &self,
        user_id: u64,
        query: String,
        personalized: bool,
        history: FeedbackHistory,
        degraded: bool,
    ) -> Result<Feed> {
        let summaries = self
            .recommender
            .recommend(&query, user_id)
            .await
            .context("recommendation request failed")?;
        debug!("recommender returned {} movies", summaries.len());

        let movies = decorate(summaries, &self.images);
        let preload = match &self.preloader {
            Some(preloader) => preloader.preload(&movies).await,
            None => PreloadReport::default(),
        };
        let movies = reconcile(movies, &history);

        Ok(Feed {
            query,
            movies,
            personalized,
            degraded,
            preload,
        })
    }

    async fn history_or_degraded(&self, user_id: u64) -> (FeedbackHistory, bool) {
        match self.feedback.history(user_id).await {
            Ok(history) => (history, false),
            Err(err) => {
                warn!(
                    "feedback history unavailable for user {}: {}; continuing without annotations",
                    user_id, err
                );
                (Vec::new(), true)
            }
        }
    }
}

fn validate_user(user_id: u64) -> Result<()> {
    if user_id == 0 {
        anyhow::bail!("a user identity is required");
    }
    Ok(())
}
