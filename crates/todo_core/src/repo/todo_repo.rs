//! Todo store: lists and items.
//!
//! # Responsibility
//! - Create lists and items, resolve them by id, persist status changes.
//! - Return a list's items in creation order.
//!
//! # Invariants
//! - `create_todo` is unconditional: it neither checks that `list_id` exists
//!   nor validates the description.
//! - `get_todos` fails `NotFound` for a list that was never created.
//! - Per-list item order is an append-only index, independent of map order.
//! - `updated_at` is written only by this store, from the injected clock.
//! - `transition_todo` reads and writes the item under one write guard, so
//!   concurrent requests see each other's status.

use crate::clock::{Clock, SystemClock};
use crate::id_gen::{IdGenerator, RandomIdGenerator};
use crate::model::id::{IdKind, TodoItemId, TodoListId, UserId};
use crate::model::todo::{TodoItem, TodoList, TodoStatus};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::{read_lock, write_lock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Todo store contract consumed by the service layer.
pub trait TodoRepository {
    /// Inserts an empty list with a fresh `lst_` id.
    fn create_todo_list(&self) -> TodoList;

    /// Inserts a `todo`-status item stamped with the current time.
    fn create_todo(&self, list_id: &TodoListId, description: &str, user_id: &UserId)
        -> TodoItem;

    /// # Errors
    /// - `InvalidFormat` when `id` is not a `tdo_` identifier.
    /// - `NotFound` when no such item exists.
    fn get_todo(&self, id: &str) -> RepoResult<TodoItem>;

    /// Returns the list's items oldest first.
    ///
    /// # Errors
    /// - `InvalidFormat` when `list_id` is not a `lst_` identifier.
    /// - `NotFound` when the list was never created.
    fn get_todos(&self, list_id: &str) -> RepoResult<Vec<TodoItem>>;

    /// Persists an existing item and stamps `updated_at`; returns the stored copy.
    ///
    /// # Errors
    /// - `NotFound` when `item.id` is unknown.
    fn update_todo(&self, item: &TodoItem) -> RepoResult<TodoItem>;

    /// Applies `status` to the stored item and stamps `updated_at` in one step.
    ///
    /// # Errors
    /// - `InvalidFormat` when `id` is not a `tdo_` identifier.
    /// - `NotFound` when no such item exists.
    /// - `InvalidTransition` when the stored status does not allow `status`;
    ///   the item is left untouched.
    fn transition_todo(&self, id: &str, status: &str) -> RepoResult<TodoItem>;
}

impl<R: TodoRepository + ?Sized> TodoRepository for Arc<R> {
    fn create_todo_list(&self) -> TodoList {
        (**self).create_todo_list()
    }

    fn create_todo(
        &self,
        list_id: &TodoListId,
        description: &str,
        user_id: &UserId,
    ) -> TodoItem {
        (**self).create_todo(list_id, description, user_id)
    }

    fn get_todo(&self, id: &str) -> RepoResult<TodoItem> {
        (**self).get_todo(id)
    }

    fn get_todos(&self, list_id: &str) -> RepoResult<Vec<TodoItem>> {
        (**self).get_todos(list_id)
    }

    fn update_todo(&self, item: &TodoItem) -> RepoResult<TodoItem> {
        (**self).update_todo(item)
    }

    fn transition_todo(&self, id: &str, status: &str) -> RepoResult<TodoItem> {
        (**self).transition_todo(id, status)
    }
}

#[derive(Debug, Default)]
struct TodoState {
    lists: HashMap<TodoListId, TodoList>,
    items: HashMap<TodoItemId, TodoItem>,
    /// Item ids per list, in insertion order. May hold entries for lists that
    /// were never created, since creation trusts the caller.
    order: HashMap<TodoListId, Vec<TodoItemId>>,
}

/// Process-local todo store.
pub struct InMemoryTodoRepository {
    state: RwLock<TodoState>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTodoRepository {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(TodoState::default()),
            ids,
            clock,
        }
    }

    /// Number of created lists.
    pub fn list_count(&self) -> usize {
        read_lock(&self.state).lists.len()
    }

    /// Number of created items across all lists.
    pub fn todo_count(&self) -> usize {
        read_lock(&self.state).items.len()
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new(Arc::new(RandomIdGenerator), Arc::new(SystemClock))
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn create_todo_list(&self) -> TodoList {
        let list = TodoList {
            id: TodoListId::from_generated(self.ids.generate(IdKind::TodoList)),
        };
        write_lock(&self.state)
            .lists
            .insert(list.id.clone(), list.clone());
        list
    }

    fn create_todo(
        &self,
        list_id: &TodoListId,
        description: &str,
        user_id: &UserId,
    ) -> TodoItem {
        let item = TodoItem {
            id: TodoItemId::from_generated(self.ids.generate(IdKind::TodoItem)),
            list_id: list_id.clone(),
            user_id: user_id.clone(),
            description: description.to_string(),
            status: TodoStatus::Todo,
            updated_at: self.clock.now(),
        };

        let mut state = write_lock(&self.state);
        state
            .order
            .entry(list_id.clone())
            .or_default()
            .push(item.id.clone());
        state.items.insert(item.id.clone(), item.clone());
        item
    }

    fn get_todo(&self, id: &str) -> RepoResult<TodoItem> {
        let item_id = TodoItemId::parse(id)?;
        read_lock(&self.state)
            .items
            .get(&item_id)
            .cloned()
            .ok_or_else(|| RepoError::not_found(IdKind::TodoItem, id))
    }

    fn get_todos(&self, list_id: &str) -> RepoResult<Vec<TodoItem>> {
        let list_id = TodoListId::parse(list_id)?;
        let state = read_lock(&self.state);
        if !state.lists.contains_key(&list_id) {
            return Err(RepoError::not_found(IdKind::TodoList, list_id.as_str()));
        }

        let items: Vec<TodoItem> = state
            .order
            .get(&list_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|item_id| state.items.get(item_id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    fn update_todo(&self, item: &TodoItem) -> RepoResult<TodoItem> {
        let mut state = write_lock(&self.state);
        let stored = state
            .items
            .get_mut(&item.id)
            .ok_or_else(|| RepoError::not_found(IdKind::TodoItem, item.id.as_str()))?;

        // List membership is fixed at creation; the order index depends on it.
        let mut persisted = item.clone();
        persisted.list_id = stored.list_id.clone();
        persisted.updated_at = self.clock.now();
        *stored = persisted.clone();
        Ok(persisted)
    }

    fn transition_todo(&self, id: &str, status: &str) -> RepoResult<TodoItem> {
        let item_id = TodoItemId::parse(id)?;
        let mut state = write_lock(&self.state);
        let stored = state
            .items
            .get_mut(&item_id)
            .ok_or_else(|| RepoError::not_found(IdKind::TodoItem, id))?;

        // Decide and persist under the same guard.
        stored.change_status(status)?;
        stored.updated_at = self.clock.now();
        Ok(stored.clone())
    }
}
