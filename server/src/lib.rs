//! HTTP API for an in-memory todo service.
//!
//! # Overview
//! Five CRUD routes over a single `TodoStore`: list, get, create,
//! update, delete. All state lives in memory and is discarded on
//! shutdown.
//!
//! # Design
//! - The store is constructed once by the composition root (`main` or a
//!   test) and injected into `app`, never held as ambient global state.
//! - One `tokio::sync::RwLock` guards the whole store, so each
//!   operation's find-then-mutate step runs without interleaving.
//! - Handlers validate input and translate `StoreError` into HTTP
//!   responses; the store itself knows nothing about HTTP.

pub mod error;
pub mod store;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;

pub use error::ApiError;
pub use store::{StoreError, Todo, TodoStore};

/// Shared handle to the one store instance owned by the composition root.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// A fresh, empty store behind its lock.
pub fn shared_store() -> SharedStore {
    Arc::new(RwLock::new(TodoStore::new()))
}

/// Request payload for creating a todo. `completed` is not accepted;
/// new todos always start incomplete.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for updating a todo. Only fields present in the JSON
/// are applied; omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.read().await.list())
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.read().await.get(id)?;
    Ok(Json(todo))
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if input.title.is_empty() {
        return Err(ApiError::EmptyTitle);
    }
    let todo = store.write().await.create(input.title);
    info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store
        .write()
        .await
        .update(id, input.title, input.completed)?;
    info!(id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    store.write().await.delete(id)?;
    info!(id, "deleted todo");
    Ok(Json(json!({ "message": "Todo deleted" })))
}
