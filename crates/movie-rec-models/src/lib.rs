pub mod decorated;
pub mod feedback;
pub mod movie;

pub use decorated::DecoratedMovie;
pub use feedback::{FeedbackKind, FeedbackRecord};
pub use movie::MovieSummary;

/// A user's accumulated feedback, newest-last or in arbitrary order.
/// The source does not guarantee ordering; consumers sort by timestamp.
pub type FeedbackHistory = Vec<FeedbackRecord>;
