use serde::{Deserialize, Serialize};

/// A movie as returned by the remote recommender. Externally owned;
/// everything past `title` is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub year: Option<u32>,
    pub rating: Option<f32>,
    pub description: Option<String>,
    pub genres: Option<String>,
    pub poster_path: Option<String>,
}
