mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use taskcal_client::TaskClient;

#[derive(Parser)]
#[command(name = "taskcal")]
#[command(about = "Track tasks stored in your calendar events")]
struct Cli {
    /// Base URL of the taskcal server
    #[arg(long, global = true, default_value = "http://127.0.0.1:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the calendars on the server
    Calendars,
    /// List the tracked events of a day with their tasks
    Events {
        /// Calendar id
        calendar: String,

        /// Day to list (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Mark a task (or, without --task, every task of the event) completed
    Done {
        /// Calendar id
        calendar: String,

        /// Event id
        event: String,

        /// The task text; omit to complete the whole event
        #[arg(long)]
        task: Option<String>,
    },
    /// Move a completed task back to the incomplete list
    Undo {
        /// Calendar id
        calendar: String,

        /// Event id
        event: String,

        /// The task text
        #[arg(long)]
        task: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = TaskClient::new(&cli.url);

    match cli.command {
        Commands::Calendars => commands::calendars::run(&client).await,
        Commands::Events { calendar, date } => {
            commands::events::run(&client, &calendar, date.as_deref()).await
        }
        Commands::Done {
            calendar,
            event,
            task,
        } => commands::done::run(&client, &calendar, &event, task.as_deref()).await,
        Commands::Undo {
            calendar,
            event,
            task,
        } => commands::undo::run(&client, &calendar, &event, &task).await,
    }
}
