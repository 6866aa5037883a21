pub mod feed;
pub mod posters;
pub mod preload;
pub mod query;
pub mod reconcile;
pub mod submit;

pub use feed::{Feed, FeedEngine};
pub use posters::{decorate, resolve_poster, ResolvedPoster};
pub use preload::{PreloadReport, PreloadScheduler};
pub use query::synthesize;
pub use reconcile::{build_feedback_map, reconcile};
pub use submit::{record_click, submit_feedback, SubmitOutcome, SubmitResult};
