use anyhow::{Context, Result};
use taskcal_client::TaskClient;

use super::render_task_set;

pub async fn run(client: &TaskClient, calendar: &str, event: &str, task: &str) -> Result<()> {
    let tasks = client
        .undo_task(calendar, event, task)
        .await
        .context("Could not mark as incomplete.")?;

    println!("Marked as incomplete.");
    render_task_set(&tasks);

    Ok(())
}
