pub mod config;
pub mod feedback;
pub mod history;
pub mod recommend;

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use movie_rec_config::{Config, CredentialStore, PathManager};
use movie_rec_core::{FeedEngine, PreloadScheduler};
use movie_rec_sources::{FeedbackClient, RecommenderClient, RetryPolicy, TmdbImageClient};

use crate::output::Output;

/// Build the engine from the on-disk config and credentials. `preload`
/// false drops the preloader entirely (used by commands that never
/// render posters).
pub(crate) fn build_engine(preload: bool) -> Result<(Config, FeedEngine)> {
    let paths = PathManager::default();

    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| eyre!("Failed to load config from {}: {}", paths.config_file().display(), e))?;

    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    let token = credentials.get_api_token().cloned();

    let api_timeout = Duration::from_secs(config.api.timeout_secs);
    let recommender = Arc::new(RecommenderClient::new(
        config.api.base_url.clone(),
        token.clone(),
        api_timeout,
    ));
    let feedback = Arc::new(FeedbackClient::new(
        config.api.base_url.clone(),
        token,
        api_timeout,
    ));

    let preloader = (preload && config.preload.enabled).then(|| {
        let probe = Arc::new(TmdbImageClient::new(Duration::from_secs(
            config.images.timeout_secs,
        )));
        PreloadScheduler::new(
            probe,
            config.preload.concurrency,
            RetryPolicy::new(
                config.retry.max_attempts,
                Duration::from_millis(config.retry.base_delay_ms),
            ),
        )
    });

    let engine = FeedEngine::new(recommender, feedback, preloader, config.images.clone());
    Ok((config, engine))
}

/// User identity: the --user flag wins, then the configured default.
/// Commands refuse to touch the network without one.
pub(crate) fn resolve_user(flag: Option<u64>, config: &Config) -> Result<u64> {
    flag.or(config.api.user_id)
        .ok_or_else(|| eyre!("No user id; pass --user or set api.user_id in the config"))
}

/// Spinner shown while a remote call is in flight, human output only.
pub(crate) fn spinner(output: &Output, msg: &str) -> Option<ProgressBar> {
    if !output.is_human() || output.is_quiet() {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}
