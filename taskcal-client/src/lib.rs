//! Typed client for the calendar-tasks server API.
//!
//! Wraps the `taskcal-api` request layer with the endpoints the taskcal UI
//! consumes: listing calendars, listing the tracked events of a day, and
//! moving tasks between an event's completed and incomplete lists. Every
//! operation is one HTTP round-trip; errors surface as
//! [`ApiError`](taskcal_api::ApiError), with non-success statuses carrying
//! the server's decoded error body.

pub mod types;

use chrono::NaiveDate;

use taskcal_api::{Api, Body, HttpTransport, RequestConfig, Transport};

pub use taskcal_api::{ApiError, ApiResult};
pub use types::{CalendarInfo, EventDetails, TaskOp, TaskSet};

use crate::types::TaskUpdate;

/// Client for a taskcal server.
#[derive(Debug, Clone)]
pub struct TaskClient<T: Transport = HttpTransport> {
    api: Api<T>,
    base_url: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        TaskClient::with_api(Api::new(), base_url)
    }
}

impl<T: Transport> TaskClient<T> {
    /// Client over a caller-supplied transport, for tests and embedding.
    pub fn with_api(api: Api<T>, base_url: &str) -> Self {
        TaskClient {
            api,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn config(&self, path: &str) -> RequestConfig {
        RequestConfig::for_url(format!("{}{}", self.base_url, path))
    }

    /// GET /api/calendars
    pub async fn list_calendars(&self) -> ApiResult<Vec<CalendarInfo>> {
        self.api.get(self.config("/api/calendars")).await?.parse()
    }

    /// GET /api/calendars/:id/events?date=YYYY-MM-DD
    pub async fn list_events(
        &self,
        calendar_id: &str,
        date: NaiveDate,
    ) -> ApiResult<Vec<EventDetails>> {
        let config = self
            .config(&format!("/api/calendars/{calendar_id}/events"))
            .query("date", date.format("%Y-%m-%d").to_string());
        self.api.get(config).await?.parse()
    }

    /// PUT /api/calendars/:id/events/:eventId?op=DONE
    ///
    /// Marks every incomplete task of the event completed and returns the
    /// event's new task lists.
    pub async fn complete_all(&self, calendar_id: &str, event_id: &str) -> ApiResult<TaskSet> {
        let config = self
            .config(&format!("/api/calendars/{calendar_id}/events/{event_id}"))
            .query("op", TaskOp::Done.as_str());
        self.api.put(config, None).await?.parse()
    }

    /// Mark one task completed.
    pub async fn complete_task(
        &self,
        calendar_id: &str,
        event_id: &str,
        task: &str,
    ) -> ApiResult<TaskSet> {
        self.update_task(calendar_id, event_id, TaskOp::Done, task)
            .await
    }

    /// Move one completed task back to the incomplete list.
    pub async fn undo_task(
        &self,
        calendar_id: &str,
        event_id: &str,
        task: &str,
    ) -> ApiResult<TaskSet> {
        self.update_task(calendar_id, event_id, TaskOp::Undo, task)
            .await
    }

    /// PUT /api/calendars/:id/events/:eventId/tasks?op=DONE|UNDO
    async fn update_task(
        &self,
        calendar_id: &str,
        event_id: &str,
        op: TaskOp,
        task: &str,
    ) -> ApiResult<TaskSet> {
        let config = self
            .config(&format!(
                "/api/calendars/{calendar_id}/events/{event_id}/tasks"
            ))
            .query("op", op.as_str());
        let body = Body::json(&TaskUpdate {
            task: task.to_string(),
        })?;
        self.api.put(config, Some(body)).await?.parse()
    }
}
