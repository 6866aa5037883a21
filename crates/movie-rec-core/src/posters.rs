use movie_rec_config::ImagesConfig;
use movie_rec_models::{DecoratedMovie, MovieSummary};

/// Result of resolving a poster path against the CDN settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPoster {
    pub url: String,
    pub has_valid: bool,
}

/// Map a partial poster path to a fully-qualified, size-bucketed CDN
/// URL. A missing or blank path resolves to the fallback asset with
/// `has_valid = false`. Pure; no I/O.
pub fn resolve_poster(path: Option<&str>, images: &ImagesConfig) -> ResolvedPoster {
    let trimmed = path.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return ResolvedPoster {
            url: images.fallback_asset.clone(),
            has_valid: false,
        };
    }

    let base = images.cdn_base.trim_end_matches('/');
    let url = if trimmed.starts_with('/') {
        format!("{}/{}{}", base, images.size_bucket, trimmed)
    } else {
        format!("{}/{}/{}", base, images.size_bucket, trimmed)
    };
    ResolvedPoster {
        url,
        has_valid: true,
    }
}

/// One-way transform from raw recommender results to the decorated form
/// the presentation layer consumes. Feedback annotation starts empty
/// and is filled in by reconciliation.
pub fn decorate(movies: Vec<MovieSummary>, images: &ImagesConfig) -> Vec<DecoratedMovie> {
    movies
        .into_iter()
        .map(|movie| {
            let resolved = resolve_poster(movie.poster_path.as_deref(), images);
            DecoratedMovie {
                movie,
                poster_url: resolved.url,
                fallback_poster_url: images.fallback_asset.clone(),
                has_valid_poster: resolved.has_valid,
                user_feedback: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> ImagesConfig {
        ImagesConfig::default()
    }

    #[test]
    fn test_missing_and_blank_paths_resolve_to_fallback() {
        let none = resolve_poster(None, &images());
        let empty = resolve_poster(Some(""), &images());
        let blank = resolve_poster(Some("   "), &images());

        for resolved in [&none, &empty, &blank] {
            assert!(!resolved.has_valid);
            assert_eq!(resolved.url, "/placeholder-poster.jpg");
        }
    }

    #[test]
    fn test_leading_separator_is_normalized() {
        let with = resolve_poster(Some("/poster.jpg"), &images());
        let without = resolve_poster(Some("poster.jpg"), &images());
        assert_eq!(with, without);
        assert_eq!(with.url, "https://image.tmdb.org/t/p/w500/poster.jpg");
        assert!(with.has_valid);
    }

    #[test]
    fn test_custom_size_bucket() {
        let mut config = images();
        config.size_bucket = "w342".to_string();
        let resolved = resolve_poster(Some("/poster.jpg"), &config);
        assert_eq!(resolved.url, "https://image.tmdb.org/t/p/w342/poster.jpg");
    }

    #[test]
    fn test_decorate_sets_poster_fields_and_empty_feedback() {
        let movies = vec![
            MovieSummary {
                id: 1,
                title: "Heat".to_string(),
                year: Some(1995),
                rating: None,
                description: None,
                genres: None,
                poster_path: Some("heat.jpg".to_string()),
            },
            MovieSummary {
                id: 2,
                title: "Unseen".to_string(),
                year: None,
                rating: None,
                description: None,
                genres: None,
                poster_path: None,
            },
        ];

        let decorated = decorate(movies, &images());
        assert_eq!(decorated.len(), 2);

        assert!(decorated[0].has_valid_poster);
        assert_eq!(
            decorated[0].poster_url,
            "https://image.tmdb.org/t/p/w500/heat.jpg"
        );
        assert_eq!(decorated[0].fallback_poster_url, "/placeholder-poster.jpg");
        assert!(decorated[0].user_feedback.is_none());

        assert!(!decorated[1].has_valid_poster);
        assert_eq!(decorated[1].poster_url, "/placeholder-poster.jpg");
    }
}
