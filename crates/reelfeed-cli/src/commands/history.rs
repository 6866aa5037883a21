use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::commands::{build_engine, resolve_user, spinner};
use crate::output::Output;

pub async fn run(user: Option<u64>, output: &Output) -> Result<()> {
    let (config, engine) = build_engine(false)?;
    let user_id = resolve_user(user, &config)?;

    let bar = spinner(output, "Fetching feedback history...");
    let history = engine.history(user_id).await;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    let history = history.map_err(|e| eyre!("Failed to fetch history: {}", e))?;

    if !output.is_human() {
        match serde_json::to_value(&history) {
            Ok(value) => output.json(&value),
            Err(e) => output.error(format!("Failed to encode history: {}", e)),
        }
        return Ok(());
    }

    if history.is_empty() {
        output.info("No feedback recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["When", "Movie", "Year", "Kind"]);
    for record in &history {
        table.add_row(vec![
            Cell::new(record.timestamp.format("%Y-%m-%d %H:%M")),
            Cell::new(&record.movie_title),
            Cell::new(record.movie_year.map_or(String::new(), |y| y.to_string())),
            Cell::new(record.kind),
        ]);
    }
    output.info(table.to_string());
    Ok(())
}
