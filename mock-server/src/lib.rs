use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Key accepted when none is configured.
pub const DEFAULT_API_KEY: &str = "twp_mock_key";

const DEFAULT_PAGE_SIZE: usize = 250;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
}

#[derive(Default)]
struct Store {
    tasks: BTreeMap<u64, TodoItem>,
    next_id: u64,
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    store: Arc<RwLock<Store>>,
}

pub fn app() -> Router {
    app_with_key(DEFAULT_API_KEY)
}

pub fn app_with_key(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        store: Arc::new(RwLock::new(Store::default())),
    };
    Router::new()
        .route("/tasks.json", get(list_tasks).post(create_task))
        .route(
            "/tasks/{file}",
            get(get_task).put(edit_task).delete(delete_task),
        )
        .route("/tasks/{id}/{action}", put(task_action))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_key(api_key)).await
}

async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    let page = match parse_positive(params.get("page"), 1) {
        Some(page) => page,
        None => return error(StatusCode::BAD_REQUEST, "page must be a positive integer"),
    };
    let page_size = match parse_positive(params.get("pageSize"), DEFAULT_PAGE_SIZE) {
        Some(size) => size,
        None => return error(StatusCode::BAD_REQUEST, "pageSize must be a positive integer"),
    };

    let only_completed = params.get("filter").map(String::as_str) == Some("completed");
    let include_completed = params.get("includeCompletedTasks").map(String::as_str) == Some("true");

    let store = state.store.read().await;
    let matching: Vec<&TodoItem> = store
        .tasks
        .values()
        .filter(|task| {
            if only_completed {
                task.completed
            } else {
                include_completed || !task.completed
            }
        })
        .collect();

    let records = matching.len();
    let pages = records.div_ceil(page_size).max(1);
    let items: Vec<&TodoItem> = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    (
        [
            ("x-page", page.to_string()),
            ("x-pages", pages.to_string()),
            ("x-records", records.to_string()),
        ],
        Json(json!({"STATUS": "OK", "todo-items": items})),
    )
        .into_response()
}

async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    let Some(fields) = payload
        .get("todo-item")
        .or_else(|| payload.get("task"))
        .and_then(Value::as_object)
    else {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "missing todo-item");
    };
    let Some(content) = fields.get("content").and_then(Value::as_str) else {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "content is required");
    };

    let mut store = state.store.write().await;
    store.next_id += 1;
    let task = TodoItem {
        id: store.next_id,
        content: content.to_string(),
        description: fields
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        completed: false,
    };
    let id = task.id;
    store.tasks.insert(id, task);

    (
        StatusCode::CREATED,
        Json(json!({"STATUS": "OK", "id": id.to_string()})),
    )
        .into_response()
}

async fn get_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(file): Path<String>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let Some(id) = parse_member(&file) else {
        return not_found();
    };

    let store = state.store.read().await;
    match store.tasks.get(&id) {
        Some(task) => Json(json!({"STATUS": "OK", "todo-item": task})).into_response(),
        None => not_found(),
    }
}

async fn edit_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(file): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let Some(id) = parse_member(&file) else {
        return not_found();
    };
    let Some(fields) = payload.get("todo-item").and_then(Value::as_object) else {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "missing todo-item");
    };

    let mut store = state.store.write().await;
    let Some(task) = store.tasks.get_mut(&id) else {
        return not_found();
    };
    if let Some(content) = fields.get("content").and_then(Value::as_str) {
        task.content = content.to_string();
    }
    if let Some(description) = fields.get("description").and_then(Value::as_str) {
        task.description = description.to_string();
    }
    ok()
}

async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(file): Path<String>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let Some(id) = parse_member(&file) else {
        return not_found();
    };

    match state.store.write().await.tasks.remove(&id) {
        Some(_) => ok(),
        None => not_found(),
    }
}

async fn task_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, action)): Path<(u64, String)>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let completed = match action.as_str() {
        "complete.json" => true,
        "uncomplete.json" => false,
        _ => return not_found(),
    };

    let mut store = state.store.write().await;
    match store.tasks.get_mut(&id) {
        Some(task) => {
            task.completed = completed;
            ok()
        }
        None => not_found(),
    }
}

/// Basic auth with the configured key as username and any non-empty password.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), Response> {
    let credentials = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Basic "))
        .and_then(|encoded| STANDARD.decode(encoded).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok());

    match credentials.as_deref().and_then(|pair| pair.split_once(':')) {
        Some((key, password)) if key == &*state.api_key && !password.is_empty() => Ok(()),
        _ => {
            tracing::warn!("rejected request with missing or invalid credentials");
            Err(error(StatusCode::UNAUTHORIZED, "Unauthorized"))
        }
    }
}

/// `42.json` -> `42`.
fn parse_member(file: &str) -> Option<u64> {
    file.strip_suffix(".json")?.parse().ok()
}

fn parse_positive(raw: Option<&String>, default: usize) -> Option<usize> {
    match raw {
        None => Some(default),
        Some(raw) => raw.parse().ok().filter(|n| *n > 0),
    }
}

fn ok() -> Response {
    Json(json!({"STATUS": "OK"})).into_response()
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found")
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"STATUS": "Error", "MESSAGE": message}))).into_response()
}
