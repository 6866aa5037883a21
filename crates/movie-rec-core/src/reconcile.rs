use std::collections::HashMap;

use movie_rec_models::{DecoratedMovie, FeedbackKind, FeedbackRecord};

/// Latest feedback kind per movie. The history is sorted descending by
/// timestamp (stable) and the first record seen per movie id wins, so
/// conflicting entries resolve to the most recent one regardless of
/// arrival order.
pub fn build_feedback_map(history: &[FeedbackRecord]) -> HashMap<u64, FeedbackKind> {
    let mut by_recency: Vec<&FeedbackRecord> = history.iter().collect();
    by_recency.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut map = HashMap::new();
    for record in by_recency {
        map.entry(record.movie_id).or_insert(record.kind);
    }
    map
}

/// Annotate a result set with the user's latest feedback per movie.
/// Movies without a history entry get `None`. Produces a fresh list;
/// idempotent for identical inputs.
pub fn reconcile(
    movies: Vec<DecoratedMovie>,
    history: &[FeedbackRecord],
) -> Vec<DecoratedMovie> {
    let feedback_map = build_feedback_map(history);
    movies
        .into_iter()
        .map(|mut movie| {
            movie.user_feedback = feedback_map.get(&movie.movie.id).copied();
            movie
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use movie_rec_models::MovieSummary;

    fn record(movie_id: u64, kind: FeedbackKind, ts: i64) -> FeedbackRecord {
        FeedbackRecord {
            movie_id,
            movie_title: format!("Movie{}", movie_id),
            movie_year: None,
            kind,
            timestamp: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    fn decorated(id: u64) -> DecoratedMovie {
        DecoratedMovie {
            movie: MovieSummary {
                id,
                title: format!("Movie{}", id),
                year: None,
                rating: None,
                description: None,
                genres: None,
                poster_path: None,
            },
            poster_url: "/placeholder-poster.jpg".to_string(),
            fallback_poster_url: "/placeholder-poster.jpg".to_string(),
            has_valid_poster: false,
            user_feedback: None,
        }
    }

    #[test]
    fn test_most_recent_feedback_wins() {
        let history = vec![
            record(5, FeedbackKind::Dislike, 1),
            record(5, FeedbackKind::Like, 2),
        ];
        let movies = reconcile(vec![decorated(5)], &history);
        assert_eq!(movies[0].user_feedback, Some(FeedbackKind::Like));
    }

    #[test]
    fn test_arrival_order_does_not_matter() {
        let history = vec![
            record(5, FeedbackKind::Like, 2),
            record(5, FeedbackKind::Dislike, 1),
        ];
        let movies = reconcile(vec![decorated(5)], &history);
        assert_eq!(movies[0].user_feedback, Some(FeedbackKind::Like));
    }

    #[test]
    fn test_movies_without_history_get_none() {
        let history = vec![record(1, FeedbackKind::Like, 1)];
        let movies = reconcile(vec![decorated(1), decorated(2)], &history);
        assert_eq!(movies[0].user_feedback, Some(FeedbackKind::Like));
        assert_eq!(movies[1].user_feedback, None);
    }

    #[test]
    fn test_empty_history_annotates_all_none() {
        let movies = reconcile(vec![decorated(1), decorated(2)], &[]);
        assert!(movies.iter().all(|m| m.user_feedback.is_none()));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let history = vec![
            record(1, FeedbackKind::Click, 3),
            record(2, FeedbackKind::Dislike, 1),
        ];
        let movies = vec![decorated(1), decorated(2), decorated(3)];
        let once = reconcile(movies.clone(), &history);
        let twice = reconcile(once.clone(), &history);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_overwrites_stale_annotation() {
        let mut movie = decorated(9);
        movie.user_feedback = Some(FeedbackKind::Dislike);
        let history = vec![record(9, FeedbackKind::Like, 4)];
        let movies = reconcile(vec![movie], &history);
        assert_eq!(movies[0].user_feedback, Some(FeedbackKind::Like));
    }
}
