use movie_rec_models::MovieSummary;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SourceError;

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    user_input: &'a str,
    user_id: u64,
}

/// Wire shape of one recommended movie. The contract only guarantees
/// `id` and `title`; the score may arrive as `rating` or `score`
/// depending on the ranking stage that produced it.
#[derive(Debug, Deserialize)]
struct RecommendedMovie {
    id: u64,
    title: String,
    #[serde(default)]
    year: Option<u32>,
    #[serde(default, alias = "score")]
    rating: Option<f32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
}

impl From<RecommendedMovie> for MovieSummary {
    fn from(movie: RecommendedMovie) -> Self {
        MovieSummary {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
            description: movie.description,
            genres: movie.genres,
            poster_path: movie.poster_path,
        }
    }
}

/// Request recommendations for one user query.
pub async fn recommend(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    user_input: &str,
    user_id: u64,
) -> Result<Vec<MovieSummary>, SourceError> {
    let url = format!("{}/recommend/", base_url.trim_end_matches('/'));

    let mut request = client
        .post(&url)
        .json(&RecommendRequest { user_input, user_id });
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::from_status(status, "recommendations"));
    }

    let movies: Vec<RecommendedMovie> = response
        .json()
        .await
        .map_err(|e| SourceError::Payload(e.to_string()))?;
    debug!(
        "recommender returned {} movies for user {}",
        movies.len(),
        user_id
    );

    Ok(movies.into_iter().map(MovieSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_movie() {
        let json = r#"{
            "id": 42,
            "title": "Heat",
            "year": 1995,
            "rating": 8.3,
            "description": "A heist crew and a detective.",
            "genres": "Crime, Thriller",
            "poster_path": "/heat.jpg"
        }"#;
        let movie: RecommendedMovie = serde_json::from_str(json).unwrap();
        let summary = MovieSummary::from(movie);
        assert_eq!(summary.id, 42);
        assert_eq!(summary.title, "Heat");
        assert_eq!(summary.year, Some(1995));
        assert_eq!(summary.poster_path.as_deref(), Some("/heat.jpg"));
    }

    #[test]
    fn test_deserialize_minimal_movie_defaults_optionals() {
        let json = r#"{"id": 7, "title": "Clue"}"#;
        let movie: RecommendedMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 7);
        assert!(movie.year.is_none());
        assert!(movie.rating.is_none());
        assert!(movie.poster_path.is_none());
    }

    #[test]
    fn test_score_field_maps_to_rating() {
        let json = r#"{"id": 7, "title": "Clue", "score": 0.91}"#;
        let movie: RecommendedMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.rating, Some(0.91));
    }
}
