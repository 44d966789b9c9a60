pub mod calendars;
pub mod done;
pub mod events;
pub mod undo;

use owo_colors::OwoColorize;
use taskcal_client::TaskSet;

/// Print the task lists of an event after a mutation.
pub fn render_task_set(tasks: &TaskSet) {
    for task in &tasks.incomplete {
        println!("   {} {}", "○".red(), task);
    }
    for task in &tasks.completed {
        println!("   {} {}", "✓".green(), task.dimmed());
    }
}
