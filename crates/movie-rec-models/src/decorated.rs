use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackKind;
use crate::movie::MovieSummary;

/// A recommender result decorated with a resolved poster and the user's
/// latest feedback for it. Constructed once per fetch; `user_feedback`
/// may later be rewritten by the submission coordinator and is confirmed
/// or corrected by the next reconciliation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecoratedMovie {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub poster_url: String,
    pub fallback_poster_url: String,
    pub has_valid_poster: bool,
    pub user_feedback: Option<FeedbackKind>,
}

impl DecoratedMovie {
    pub fn id(&self) -> u64 {
        self.movie.id
    }

    pub fn title(&self) -> &str {
        &self.movie.title
    }
}
