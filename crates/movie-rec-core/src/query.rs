use movie_rec_models::{FeedbackKind, FeedbackRecord};

/// Query used when the user has no history at all.
pub const COLD_START_QUERY: &str = "popular movies";

const TOP_LIKED: usize = 5;
const TOP_CLICKED: usize = 3;
const RECENT_FALLBACK: usize = 2;

/// Turn a feedback history into one recommendation query. First
/// non-empty signal bucket wins: likes, then clicks, then whatever the
/// history starts with. Pure; identical input yields identical output.
pub fn synthesize(history: &[FeedbackRecord]) -> String {
    if history.is_empty() {
        return COLD_START_QUERY.to_string();
    }

    let liked = recent_titles_of_kind(history, FeedbackKind::Like, TOP_LIKED);
    if !liked.is_empty() {
        return format!("movies similar to {}", liked.join(", "));
    }

    let clicked = recent_titles_of_kind(history, FeedbackKind::Click, TOP_CLICKED);
    if !clicked.is_empty() {
        return format!("movies like {}", clicked.join(", "));
    }

    // Feedback exists but none of it is a like or a click. Take the
    // history as delivered, without sorting.
    let recent: Vec<&str> = history
        .iter()
        .take(RECENT_FALLBACK)
        .map(|r| r.movie_title.as_str())
        .collect();
    format!("recommendations based on {}", recent.join(", "))
}

/// Most recent titles of one kind. The sort is stable, so records that
/// share a timestamp keep their arrival order. Titles are not
/// deduplicated; a movie rated twice appears twice.
fn recent_titles_of_kind(
    history: &[FeedbackRecord],
    kind: FeedbackKind,
    limit: usize,
) -> Vec<String> {
    let mut matching: Vec<&FeedbackRecord> = history.iter().filter(|r| r.kind == kind).collect();
    matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matching
        .into_iter()
        .take(limit)
        .map(|r| r.movie_title.clone())
        .collect()
}
