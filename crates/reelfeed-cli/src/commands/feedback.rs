use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_rec_core::SubmitOutcome;
use movie_rec_models::FeedbackKind;

use crate::commands::{build_engine, resolve_user, spinner};
use crate::output::Output;

pub async fn run_feedback(
    movie_id: u64,
    kind: FeedbackKind,
    user: Option<u64>,
    output: &Output,
) -> Result<()> {
    tracing::debug!("feedback command started");

    let (config, engine) = build_engine(false)?;
    let user_id = resolve_user(user, &config)?;

    // The coordinator needs the live result set for its duplicate check.
    let bar = spinner(output, "Submitting feedback...");
    let feed = engine.personalized_feed(user_id).await;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    let feed = feed.map_err(|e| eyre!("Failed to fetch the current feed: {}", e))?;

    let result = engine
        .submit_feedback(user_id, feed.movies, movie_id, kind)
        .await;

    match result.outcome {
        SubmitOutcome::Submitted => {
            output.success(format!("Movie {} marked '{}'", movie_id, kind));
            Ok(())
        }
        SubmitOutcome::Duplicate => {
            output.info(format!(
                "You already marked movie {} '{}'; nothing was sent",
                movie_id, kind
            ));
            Ok(())
        }
        SubmitOutcome::Failed(err) => {
            output.error(format!("Failed to submit feedback: {}", err));
            Err(eyre!("feedback submission failed"))
        }
    }
}

pub async fn run_click(movie_id: u64, user: Option<u64>, output: &Output) -> Result<()> {
    let (config, engine) = build_engine(false)?;
    let user_id = resolve_user(user, &config)?;

    engine.record_click(user_id, movie_id).await;
    output.success(format!("Recorded click on movie {}", movie_id));
    Ok(())
}
