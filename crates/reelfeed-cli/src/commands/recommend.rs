use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use movie_rec_core::Feed;

use crate::commands::{build_engine, resolve_user, spinner};
use crate::output::Output;

pub async fn run(
    search: Option<String>,
    user: Option<u64>,
    no_preload: bool,
    output: &Output,
) -> Result<()> {
    tracing::debug!("recommend command started");

    let (config, engine) = build_engine(!no_preload)?;
    let user_id = resolve_user(user, &config)?;

    let bar = spinner(output, "Fetching recommendations...");
    let feed = match &search {
        Some(query) => engine.search_feed(user_id, query).await,
        None => engine.personalized_feed(user_id).await,
    };
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    let feed = feed.map_err(|e| eyre!("Failed to fetch recommendations: {}", e))?;

    render_feed(&feed, output);
    Ok(())
}

fn render_feed(feed: &Feed, output: &Output) {
    if !output.is_human() {
        match serde_json::to_value(feed) {
            Ok(value) => output.json(&value),
            Err(e) => output.error(format!("Failed to encode feed: {}", e)),
        }
        return;
    }

    if feed.degraded {
        output.warn("Feedback history unavailable; results are not annotated");
    }

    output.info(format!(
        "{} results for \"{}\"{}",
        feed.movies.len(),
        feed.query,
        if feed.personalized { " (personalized)" } else { "" }
    ));

    if feed.movies.is_empty() {
        output.info("No movies found. Try a different search.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Title", "Year", "Rating", "Feedback", "Poster"]);
    for movie in &feed.movies {
        table.add_row(vec![
            Cell::new(movie.id()),
            Cell::new(movie.title()),
            Cell::new(movie.movie.year.map_or(String::new(), |y| y.to_string())),
            Cell::new(
                movie
                    .movie
                    .rating
                    .map_or(String::new(), |r| format!("{:.1}", r)),
            ),
            Cell::new(movie.user_feedback.map_or(String::new(), |k| k.to_string())),
            Cell::new(if movie.has_valid_poster { "ok" } else { "fallback" }),
        ]);
    }
    output.info(table.to_string());

    if feed.preload.attempted > 0 {
        output.info(format!(
            "Preloaded {}/{} posters",
            feed.preload.succeeded, feed.preload.attempted
        ));
    }
}
