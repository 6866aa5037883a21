use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::StreamExt;
use movie_rec_models::DecoratedMovie;
use movie_rec_sources::{with_retry, PosterProbe, RetryPolicy};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of one preload pass. Informational only; preloading never
/// fails the fetch that requested it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PreloadReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Warms the image cache for a result set ahead of render. Probes run
/// through a bounded worker pool: at most `concurrency` in flight at
/// once, each with its own retry budget, and one poster failing affects
/// nothing but its own counter.
pub struct PreloadScheduler {
    probe: Arc<dyn PosterProbe>,
    concurrency: usize,
    retry: RetryPolicy,
}

impl PreloadScheduler {
    pub fn new(probe: Arc<dyn PosterProbe>, concurrency: usize, retry: RetryPolicy) -> Self {
        Self {
            probe,
            concurrency: concurrency.max(1),
            retry,
        }
    }

    /// Probe every movie that resolved to a real poster URL. The
    /// caller's list is read, never modified; rendering proceeds with
    /// its own fallback mechanics whatever happens here.
    pub async fn preload(&self, movies: &[DecoratedMovie]) -> PreloadReport {
        let urls: Vec<&str> = movies
            .iter()
            .filter(|m| m.has_valid_poster)
            .map(|m| m.poster_url.as_str())
            .collect();
        let attempted = urls.len();
        let succeeded = AtomicUsize::new(0);

        futures::stream::iter(urls)
            .for_each_concurrent(self.concurrency, |url| {
                let succeeded = &succeeded;
                async move {
                    match with_retry(&self.retry, || self.probe.probe(url)).await {
                        Ok(()) => {
                            succeeded.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(err) => warn!("poster preload failed for {}: {}", url, err),
                    }
                }
            })
            .await;

        let succeeded = succeeded.load(Ordering::Relaxed);
        let report = PreloadReport {
            attempted,
            succeeded,
            failed: attempted - succeeded,
        };
        debug!(
            "preloaded {}/{} posters ({} skipped without a poster)",
            report.succeeded,
            report.attempted,
            movies.len() - report.attempted
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use movie_rec_models::MovieSummary;
    use movie_rec_sources::SourceError;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    struct MockProbe {
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        seen: Mutex<Vec<String>>,
        failing: HashSet<String>,
    }

    impl MockProbe {
        fn new(failing: &[&str]) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                failing: failing.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl PosterProbe for MockProbe {
        async fn probe(&self, url: &str) -> Result<(), SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);
            self.seen.lock().unwrap().push(url.to_string());

            // Hold the slot long enough for siblings to pile up.
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(url) {
                Err(SourceError::NotFound(url.to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn movie(id: u64, has_poster: bool) -> DecoratedMovie {
        DecoratedMovie {
            movie: MovieSummary {
                id,
                title: format!("Movie{}", id),
                year: None,
                rating: None,
                description: None,
                genres: None,
                poster_path: has_poster.then(|| format!("/p{}.jpg", id)),
            },
            poster_url: if has_poster {
                format!("https://cdn.test/w500/p{}.jpg", id)
            } else {
                "/placeholder-poster.jpg".to_string()
            },
            fallback_poster_url: "/placeholder-poster.jpg".to_string(),
            has_valid_poster: has_poster,
            user_feedback: None,
        }
    }

    fn no_retry() -> RetryPolicy {
        RetryPolicy::new(1, Duration::ZERO)
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrency_bound_is_respected() {
        let probe = Arc::new(MockProbe::new(&[]));
        let scheduler = PreloadScheduler::new(probe.clone(), 5, no_retry());
        let movies: Vec<_> = (1..=12).map(|i| movie(i, true)).collect();

        let report = scheduler.preload(&movies).await;

        assert_eq!(report.attempted, 12);
        assert_eq!(report.succeeded, 12);
        assert_eq!(probe.calls.load(Ordering::SeqCst), 12);
        assert_eq!(probe.max_in_flight.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_failure_never_aborts_siblings() {
        let probe = Arc::new(MockProbe::new(&["https://cdn.test/w500/p3.jpg"]));
        let scheduler = PreloadScheduler::new(probe.clone(), 4, no_retry());
        let movies: Vec<_> = (1..=6).map(|i| movie(i, true)).collect();

        let report = scheduler.preload(&movies).await;

        assert_eq!(report.attempted, 6);
        assert_eq!(report.succeeded, 5);
        assert_eq!(report.failed, 1);
        assert_eq!(probe.calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_movies_without_posters_are_skipped() {
        let probe = Arc::new(MockProbe::new(&[]));
        let scheduler = PreloadScheduler::new(probe.clone(), 5, no_retry());
        let movies = vec![movie(1, true), movie(2, false), movie(3, true)];

        let report = scheduler.preload(&movies).await;

        assert_eq!(report.attempted, 2);
        let seen = probe.seen.lock().unwrap().clone();
        assert!(!seen.iter().any(|url| url.contains("placeholder")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_list_is_untouched() {
        let probe = Arc::new(MockProbe::new(&["https://cdn.test/w500/p1.jpg"]));
        let scheduler = PreloadScheduler::new(probe, 2, no_retry());
        let movies: Vec<_> = (1..=3).map(|i| movie(i, true)).collect();
        let before = movies.clone();

        scheduler.preload(&movies).await;

        assert_eq!(movies, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_probe_failures_are_retried() {
        struct FlakyProbe {
            calls: AtomicUsize,
        }

        #[async_trait]
        impl PosterProbe for FlakyProbe {
            async fn probe(&self, _url: &str) -> Result<(), SourceError> {
                let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 2 {
                    Err(SourceError::Status(
                        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    ))
                } else {
                    Ok(())
                }
            }
        }

        let probe = Arc::new(FlakyProbe {
            calls: AtomicUsize::new(0),
        });
        let scheduler = PreloadScheduler::new(
            probe.clone(),
            1,
            RetryPolicy::new(3, Duration::from_millis(10)),
        );
        let movies = vec![movie(1, true)];

        let report = scheduler.preload(&movies).await;

        assert_eq!(report.succeeded, 1);
        assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
    }
}
