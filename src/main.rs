mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calsync")]
#[command(about = "Keep a local event store and Google Calendar in sync")]
struct Cli {
    /// Print sync reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import remote events into the local store
    Import,
    /// Push unlinked local events to the remote calendar
    Export,
    /// Full bidirectional sync (import, then export)
    Sync,
    /// Manage local events
    Events {
        #[command(subcommand)]
        command: EventsCommand,
    },
}

#[derive(Subcommand)]
enum EventsCommand {
    /// List stored events
    List,
    /// Create a local event
    Add {
        /// Event title
        title: String,

        /// Start date/time (e.g., "2025-03-20T15:00" or RFC 3339)
        #[arg(short, long)]
        start: String,

        /// End date/time
        #[arg(short, long)]
        end: String,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Category tag
        #[arg(short, long)]
        category: Option<String>,

        /// Attach the standard pre-event reminders once exported
        #[arg(short, long)]
        reminder: bool,
    },
    /// Delete a local event by id
    Rm {
        /// Local event id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import => commands::import::run(cli.json).await,
        Commands::Export => commands::export::run(cli.json).await,
        Commands::Sync => commands::sync::run(cli.json).await,
        Commands::Events { command } => match command {
            EventsCommand::List => commands::events::list().await,
            EventsCommand::Add {
                title,
                start,
                end,
                description,
                category,
                reminder,
            } => {
                commands::events::add(commands::events::AddArgs {
                    title,
                    start,
                    end,
                    description,
                    category,
                    reminder,
                })
                .await
            }
            EventsCommand::Rm { id } => commands::events::rm(&id).await,
        },
    }
}
