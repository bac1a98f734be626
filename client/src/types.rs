//! Wire types for the todo API.
//!
//! Defined independently of the server crate so the client stays usable
//! against any conforming implementation; the integration tests catch
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Payload for creating a todo. The server assigns the id and starts
/// every todo incomplete, so only the title travels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Payload for a partial update. Omitted fields are not serialized and
/// keep their stored value on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// The `{"message": ...}` envelope used for the delete confirmation and
/// for error bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: String,
}
