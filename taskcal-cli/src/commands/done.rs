use anyhow::{Context, Result};
use taskcal_client::TaskClient;

use super::render_task_set;

pub async fn run(
    client: &TaskClient,
    calendar: &str,
    event: &str,
    task: Option<&str>,
) -> Result<()> {
    let tasks = match task {
        Some(task) => client
            .complete_task(calendar, event, task)
            .await
            .context("Could not mark as completed.")?,
        None => client
            .complete_all(calendar, event)
            .await
            .context("Could not mark as completed.")?,
    };

    match task {
        Some(_) => println!("Marked as completed."),
        None => println!("Marked all as completed."),
    }
    render_task_set(&tasks);

    Ok(())
}
