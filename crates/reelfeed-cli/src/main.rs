use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use movie_rec_models::FeedbackKind;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelfeed")]
#[command(about = "Reelfeed - personalized movie recommendations in your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file (daily rotation) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch recommendations: the personalized feed, or an explicit search
    Recommend {
        /// Search query instead of the personalized feed
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,

        /// User id (overrides api.user_id from the config)
        #[arg(long)]
        user: Option<u64>,

        /// Skip poster preloading
        #[arg(long, action = ArgAction::SetTrue)]
        no_preload: bool,
    },
    /// Submit like or dislike feedback for a movie
    Feedback {
        movie_id: u64,

        #[arg(value_enum)]
        kind: FeedbackArg,

        /// User id (overrides api.user_id from the config)
        #[arg(long)]
        user: Option<u64>,
    },
    /// Record a click on a movie (best-effort, never fails)
    Click {
        movie_id: u64,

        /// User id (overrides api.user_id from the config)
        #[arg(long)]
        user: Option<u64>,
    },
    /// Show the stored feedback history, newest first
    History {
        /// User id (overrides api.user_id from the config)
        #[arg(long)]
        user: Option<u64>,
    },
    /// Manage configuration and credentials
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write a default config file
    Init,
    /// Store the API token attached to recommender and feedback calls
    SetToken,
}

/// Feedback kinds a user can submit directly. Clicks go through the
/// `click` command instead.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FeedbackArg {
    Like,
    Dislike,
}

impl From<FeedbackArg> for FeedbackKind {
    fn from(arg: FeedbackArg) -> Self {
        match arg {
            FeedbackArg::Like => FeedbackKind::Like,
            FeedbackArg::Dislike => FeedbackKind::Dislike,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Recommend {
            search,
            user,
            no_preload,
        } => commands::recommend::run(search, user, no_preload, &output).await,
        Commands::Feedback {
            movie_id,
            kind,
            user,
        } => commands::feedback::run_feedback(movie_id, kind.into(), user, &output).await,
        Commands::Click { movie_id, user } => {
            commands::feedback::run_click(movie_id, user, &output).await
        }
        Commands::History { user } => commands::history::run(user, &output).await,
        Commands::Config { action } => commands::config::run(action, &output),
    }
}
