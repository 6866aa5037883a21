pub mod error;
pub mod feedback;
pub mod http;
pub mod images;
pub mod recommender;
pub mod retry;
pub mod traits;

pub use error::SourceError;
pub use feedback::FeedbackClient;
pub use images::TmdbImageClient;
pub use recommender::RecommenderClient;
pub use retry::{with_retry, RetryPolicy};
pub use traits::{FeedbackStore, PosterProbe, RecommenderSource};
