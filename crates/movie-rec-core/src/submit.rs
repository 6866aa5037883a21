use movie_rec_models::{DecoratedMovie, FeedbackKind};
use movie_rec_sources::{FeedbackStore, SourceError};
use tracing::{debug, info, warn};

/// What happened to one feedback action.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored server-side. Dependent views (stats, profile) should
    /// refresh.
    Submitted,
    /// The movie already carries this exact feedback; nothing was sent.
    /// Informational, not an error.
    Duplicate,
    /// The remote write failed. The optimistic annotation stays in
    /// place and the next reconciliation pass corrects it.
    Failed(SourceError),
}

impl SubmitOutcome {
    pub fn should_refresh_stats(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[derive(Debug)]
pub struct SubmitResult {
    pub movies: Vec<DecoratedMovie>,
    pub outcome: SubmitOutcome,
}

/// One feedback action: duplicate check, optimistic local apply, then
/// the remote write. The returned list reflects the new feedback before
/// the server has confirmed it.
pub async fn submit_feedback(
    store: &dyn FeedbackStore,
    user_id: u64,
    movies: Vec<DecoratedMovie>,
    movie_id: u64,
    kind: FeedbackKind,
) -> SubmitResult {
    let current = movies.iter().find(|m| m.movie.id == movie_id);
    if current.map_or(false, |m| m.user_feedback == Some(kind)) {
        info!(
            "movie {} already marked '{}'; skipping redundant submit",
            movie_id, kind
        );
        return SubmitResult {
            movies,
            outcome: SubmitOutcome::Duplicate,
        };
    }

    let movies: Vec<DecoratedMovie> = movies
        .into_iter()
        .map(|mut movie| {
            if movie.movie.id == movie_id {
                movie.user_feedback = Some(kind);
            }
            movie
        })
        .collect();

    match store.submit(user_id, movie_id, kind).await {
        Ok(()) => {
            debug!("feedback '{}' stored for movie {}", kind, movie_id);
            SubmitResult {
                movies,
                outcome: SubmitOutcome::Submitted,
            }
        }
        Err(err) => {
            warn!("feedback submit failed for movie {}: {}", movie_id, err);
            SubmitResult {
                movies,
                outcome: SubmitOutcome::Failed(err),
            }
        }
    }
}

/// Best-effort click tracking. Failures are logged and swallowed; a
/// lost click must never surface to the user or block navigation.
pub async fn record_click(store: &dyn FeedbackStore, user_id: u64, movie_id: u64) {
    if let Err(err) = store.track_click(user_id, movie_id).await {
        warn!("click tracking failed for movie {}: {}", movie_id, err);
    }
}
