use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user signal about one movie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
    Click,
}

impl FeedbackKind {
    /// Wire form of the kind ("like", "dislike", "click").
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Like => "like",
            FeedbackKind::Dislike => "dislike",
            FeedbackKind::Click => "click",
        }
    }
}

impl std::fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored feedback event. Immutable once recorded server-side; the
/// client only reads these and appends new ones through the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRecord {
    pub movie_id: u64,
    pub movie_title: String,
    pub movie_year: Option<u32>,
    pub kind: FeedbackKind,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_values() {
        assert_eq!(serde_json::to_string(&FeedbackKind::Like).unwrap(), "\"like\"");
        assert_eq!(
            serde_json::to_string(&FeedbackKind::Dislike).unwrap(),
            "\"dislike\""
        );
        assert_eq!(
            serde_json::to_string(&FeedbackKind::Click).unwrap(),
            "\"click\""
        );

        let kind: FeedbackKind = serde_json::from_str("\"like\"").unwrap();
        assert_eq!(kind, FeedbackKind::Like);
        assert_eq!(kind.to_string(), "like");
    }
}
