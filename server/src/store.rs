//! In-memory todo collection with store-assigned ids.
//!
//! # Design
//! `TodoStore` owns the backing `Vec` exclusively. Every operation hands
//! out owned clones, never references into the sequence, so callers can
//! hold results across later mutations. Ids come from a counter that
//! starts at 1 and only ever increases — deleting a todo never frees its
//! id for reuse.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single todo item. Wire shape: `{id, title, completed}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// The store's only failure mode: the referenced id does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Todo not found")]
    NotFound,
}

/// Ordered collection of todos plus the id-assignment counter.
///
/// Insertion order is preserved across updates and deletes; `list`
/// returns items in the order they were created.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// An empty store with the counter at 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Snapshot of the full sequence in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get(&self, id: u64) -> Result<Todo, StoreError> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new todo with the next id and `completed = false`.
    ///
    /// Title validation belongs to the handler layer; by the time a
    /// title reaches the store it is accepted as-is.
    pub fn create(&mut self, title: String) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title,
            completed: false,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Apply the provided fields to the todo with `id`, leaving omitted
    /// fields unchanged. An empty replacement title is treated the same
    /// as an omitted one.
    pub fn update(
        &mut self,
        id: u64,
        title: Option<String>,
        completed: Option<bool>,
    ) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            todo.title = title;
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    /// Remove the todo with `id`, keeping the remaining order intact.
    /// The id is never handed out again by `create`.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        self.todos.remove(index);
        Ok(())
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
