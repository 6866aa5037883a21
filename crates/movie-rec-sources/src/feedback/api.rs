use chrono::{DateTime, Utc};
use movie_rec_models::{FeedbackHistory, FeedbackKind, FeedbackRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SourceError;

#[derive(Debug, Serialize)]
struct FeedbackRequest<'a> {
    user_id: u64,
    movie_id: u64,
    feedback_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct Ack {
    #[serde(default)]
    message: String,
}

/// Envelope of the stats endpoint. Both fields are optional on the wire;
/// an empty envelope decodes to an empty history.
#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    #[serde(default)]
    total_feedback: u64,
    #[serde(default)]
    feedbacks: Vec<FeedbackEntry>,
}

#[derive(Debug, Deserialize)]
struct FeedbackEntry {
    movie_id: u64,
    #[serde(default)]
    movie_title: String,
    #[serde(default)]
    movie_year: Option<u32>,
    feedback_type: String,
    timestamp: DateTime<Utc>,
}

/// Convert wire entries to records, dropping entries whose kind the
/// client does not know instead of failing the whole history.
fn entries_to_records(entries: Vec<FeedbackEntry>) -> FeedbackHistory {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let kind = match entry.feedback_type.as_str() {
            "like" => FeedbackKind::Like,
            "dislike" => FeedbackKind::Dislike,
            "click" => FeedbackKind::Click,
            other => {
                warn!(
                    "dropping feedback entry for movie {} with unknown kind '{}'",
                    entry.movie_id, other
                );
                continue;
            }
        };
        records.push(FeedbackRecord {
            movie_id: entry.movie_id,
            movie_title: entry.movie_title,
            movie_year: entry.movie_year,
            kind,
            timestamp: entry.timestamp,
        });
    }
    records
}

/// Record one like/dislike/click for a movie.
pub async fn submit_feedback(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    user_id: u64,
    movie_id: u64,
    kind: FeedbackKind,
) -> Result<(), SourceError> {
    let url = format!("{}/feedback/", base_url.trim_end_matches('/'));

    let mut request = client.post(&url).json(&FeedbackRequest {
        user_id,
        movie_id,
        feedback_type: kind.as_str(),
    });
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::from_status(status, "feedback endpoint"));
    }

    let ack: Ack = response
        .json()
        .await
        .map_err(|e| SourceError::Payload(e.to_string()))?;
    debug!("feedback ack for movie {}: {}", movie_id, ack.message);
    Ok(())
}

/// Fetch the user's full feedback history from the stats endpoint.
pub async fn fetch_history(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    user_id: u64,
) -> Result<FeedbackHistory, SourceError> {
    let url = format!(
        "{}/feedback/stats/{}",
        base_url.trim_end_matches('/'),
        user_id
    );

    let mut request = client.get(&url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::from_status(status, "feedback history"));
    }

    let envelope: StatsEnvelope = response
        .json()
        .await
        .map_err(|e| SourceError::Payload(e.to_string()))?;
    debug!(
        "fetched {} of {} feedback entries for user {}",
        envelope.feedbacks.len(),
        envelope.total_feedback,
        user_id
    );

    Ok(entries_to_records(envelope.feedbacks))
}

/// Record a click. The endpoint takes identifiers as query parameters
/// with an empty body; the double "feedback" segment is the store's
/// published path.
pub async fn track_click(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    user_id: u64,
    movie_id: u64,
) -> Result<(), SourceError> {
    let url = format!(
        "{}/feedback/feedback/click/",
        base_url.trim_end_matches('/')
    );

    let mut request = client
        .post(&url)
        .query(&[("user_id", user_id), ("movie_id", movie_id)]);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::from_status(status, "click endpoint"));
    }
    Ok(())
}
