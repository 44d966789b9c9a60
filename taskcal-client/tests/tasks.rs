//! Full done/undo lifecycle against a live mock of the tasks server.
//!
//! Starts an axum server on a random port implementing the calendar-tasks
//! routes, then drives every client operation over real HTTP.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::RwLock;

use taskcal_client::{ApiError, TaskClient, TaskSet};

/// Task lists per event id.
type Db = Arc<RwLock<HashMap<String, TaskSet>>>;

#[derive(Deserialize)]
struct OpQuery {
    op: String,
}

#[derive(Deserialize)]
struct TaskBody {
    task: String,
}

fn app(db: Db) -> Router {
    Router::new()
        .route("/api/calendars", get(list_calendars))
        .route("/api/calendars/{id}/events", get(list_events))
        .route("/api/calendars/{id}/events/{event_id}", put(complete_all))
        .route(
            "/api/calendars/{id}/events/{event_id}/tasks",
            put(update_task),
        )
        .with_state(db)
}

async fn list_calendars() -> Json<Value> {
    Json(json!([{"id": "work", "summary": "Work"}]))
}

async fn list_events(State(db): State<Db>, Path(_id): Path<String>) -> Json<Value> {
    let db = db.read().await;
    let events: Vec<Value> = db
        .iter()
        .map(|(id, tasks)| {
            json!({
                "id": id,
                "summary": "Groceries",
                "created": "2018-01-14",
                "startDate": "2018-01-15",
                "endDate": "2018-01-15",
                "completed": tasks.completed,
                "incomplete": tasks.incomplete,
            })
        })
        .collect();
    Json(Value::Array(events))
}

async fn complete_all(
    State(db): State<Db>,
    Path((_id, event_id)): Path<(String, String)>,
    Query(query): Query<OpQuery>,
) -> Result<Json<TaskSet>, StatusCode> {
    assert_eq!(query.op, "DONE");
    let mut db = db.write().await;
    let tasks = db.get_mut(&event_id).ok_or(StatusCode::NOT_FOUND)?;
    let remaining = std::mem::take(&mut tasks.incomplete);
    tasks.completed.extend(remaining);
    Ok(Json(tasks.clone()))
}

async fn update_task(
    State(db): State<Db>,
    Path((_id, event_id)): Path<(String, String)>,
    Query(query): Query<OpQuery>,
    Json(body): Json<TaskBody>,
) -> Result<Json<TaskSet>, (StatusCode, Json<Value>)> {
    let not_found = (
        StatusCode::NOT_FOUND,
        Json(json!({"code": "TASK_NOT_FOUND"})),
    );

    let mut db = db.write().await;
    let tasks = db.get_mut(&event_id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"code": "EVENT_NOT_FOUND"})),
        )
    })?;

    let (from, to) = match query.op.as_str() {
        "DONE" => (&mut tasks.incomplete, &mut tasks.completed),
        _ => (&mut tasks.completed, &mut tasks.incomplete),
    };

    let position = from.iter().position(|t| t == &body.task).ok_or(not_found)?;
    let task = from.remove(position);
    to.push(task);

    Ok(Json(tasks.clone()))
}

async fn spawn_app() -> SocketAddr {
    let db: Db = Arc::new(RwLock::new(HashMap::from([(
        "ev1".to_string(),
        TaskSet {
            completed: vec!["milk".to_string()],
            incomplete: vec!["eggs".to_string(), "bread".to_string()],
        },
    )])));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(db)).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_task_lifecycle() {
    let addr = spawn_app().await;
    let client = TaskClient::new(&format!("http://{addr}"));

    // Calendars come back typed.
    let calendars = client.list_calendars().await.unwrap();
    assert_eq!(calendars.len(), 1);
    assert_eq!(calendars[0].id, "work");

    // The seeded event shows up with both task lists.
    let date = NaiveDate::from_ymd_opt(2018, 1, 15).unwrap();
    let events = client.list_events("work", date).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].incomplete, vec!["eggs", "bread"]);
    assert_eq!(events[0].completed, vec!["milk"]);

    // Mark one task done.
    let tasks = client.complete_task("work", "ev1", "eggs").await.unwrap();
    assert_eq!(tasks.incomplete, vec!["bread"]);
    assert!(tasks.completed.contains(&"eggs".to_string()));

    // Undo it again.
    let tasks = client.undo_task("work", "ev1", "eggs").await.unwrap();
    assert!(tasks.incomplete.contains(&"eggs".to_string()));
    assert!(!tasks.completed.contains(&"eggs".to_string()));

    // Mark everything done.
    let tasks = client.complete_all("work", "ev1").await.unwrap();
    assert!(tasks.incomplete.is_empty());
    assert_eq!(tasks.completed.len(), 3);
}

#[tokio::test]
async fn test_unknown_task_rejects_with_decoded_error_payload() {
    let addr = spawn_app().await;
    let client = TaskClient::new(&format!("http://{addr}"));

    let err = client
        .complete_task("work", "ev1", "no such task")
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, payload } => {
            assert_eq!(status, 404);
            assert_eq!(
                payload.as_json().unwrap(),
                &json!({"code": "TASK_NOT_FOUND"})
            );
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_event_is_a_status_error() {
    let addr = spawn_app().await;
    let client = TaskClient::new(&format!("http://{addr}"));

    let err = client.complete_all("work", "missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}
