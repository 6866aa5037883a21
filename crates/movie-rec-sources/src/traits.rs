use async_trait::async_trait;
use movie_rec_models::{FeedbackHistory, FeedbackKind, MovieSummary};

use crate::error::SourceError;

/// The remote recommendation service, consumed as an opaque collaborator:
/// one query in, an ordered list of movies out. Neither result count nor
/// ordering is stable across identical queries.
#[async_trait]
pub trait RecommenderSource: Send + Sync {
    async fn recommend(
        &self,
        user_input: &str,
        user_id: u64,
    ) -> Result<Vec<MovieSummary>, SourceError>;
}

/// The remote feedback store. `submit` and `history` failures propagate;
/// `track_click` is best-effort and callers swallow its errors.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn submit(
        &self,
        user_id: u64,
        movie_id: u64,
        kind: FeedbackKind,
    ) -> Result<(), SourceError>;

    async fn history(&self, user_id: u64) -> Result<FeedbackHistory, SourceError>;

    async fn track_click(&self, user_id: u64, movie_id: u64) -> Result<(), SourceError>;
}

/// One load probe against the image CDN. Success means the asset is
/// reachable and cached; the probe body is discarded.
#[async_trait]
pub trait PosterProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<(), SourceError>;
}
