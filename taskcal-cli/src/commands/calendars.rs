use anyhow::Result;
use owo_colors::OwoColorize;
use taskcal_client::TaskClient;

pub async fn run(client: &TaskClient) -> Result<()> {
    let calendars = client.list_calendars().await?;

    if calendars.is_empty() {
        println!("No calendars found.");
        return Ok(());
    }

    for calendar in calendars {
        println!("{}  {}", calendar.id.bold(), calendar.summary);
    }

    Ok(())
}
