use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use taskcal_client::{TaskClient, TaskSet};

use super::render_task_set;

pub async fn run(client: &TaskClient, calendar: &str, date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let events = client.list_events(calendar, date).await?;

    if events.is_empty() {
        println!("No events on {date}.");
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        let total = event.completed.len() + event.incomplete.len();
        println!(
            "{}  {} ({}/{} done)",
            event.id.dimmed(),
            event.summary.bold(),
            event.completed.len(),
            total
        );

        render_task_set(&TaskSet {
            completed: event.completed.clone(),
            incomplete: event.incomplete.clone(),
        });

        if i < events.len() - 1 {
            println!();
        }
    }

    Ok(())
}
