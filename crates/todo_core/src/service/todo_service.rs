//! Todo list use-case service.
//!
//! # Responsibility
//! - Authorize callers, validate input, then drive the todo store.
//! - Attach the creator's display name to items returned to callers.
//!
//! # Invariants
//! - Every operation requires a valid access token; any authenticated caller
//!   may read and write any list.
//! - Items are only created on lists that exist.
//! - Status changes are decided and persisted atomically by the todo store.

use crate::model::id::{TodoListId, UserId};
use crate::model::todo::{TodoItem, TodoList};
use crate::repo::error::RepoError;
use crate::repo::identity_repo::IdentityRepository;
use crate::repo::todo_repo::TodoRepository;
use crate::service::account_service::authorize;
use crate::service::error::ServiceError;
use crate::service::log_failure;
use crate::validation::is_valid_description;
use log::info;
use serde::Serialize;
use std::collections::HashMap;

/// Todo item as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoView {
    #[serde(flatten)]
    pub item: TodoItem,
    /// Display name of the creating user.
    pub created_by: String,
}

/// One list with its items, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoListView {
    #[serde(rename = "todo_list_id")]
    pub list_id: TodoListId,
    pub todos: Vec<TodoView>,
}

/// Use-case facade over identity and todo stores.
pub struct TodoService<I: IdentityRepository, T: TodoRepository> {
    identity: I,
    todos: T,
}

impl<I: IdentityRepository, T: TodoRepository> TodoService<I, T> {
    pub fn new(identity: I, todos: T) -> Self {
        Self { identity, todos }
    }

    /// Creates an empty list.
    ///
    /// # Errors
    /// - `Unauthorized` when the token is malformed or unknown.
    pub fn create_list(&self, access_token: &str) -> Result<TodoList, ServiceError> {
        let caller = log_failure("list_create", authorize(&self.identity, access_token))?;

        let list = self.todos.create_todo_list();
        info!(
            "event=list_create module=service status=ok list_id={} user_id={}",
            list.id, caller.user_id
        );
        Ok(list)
    }

    /// Returns a list and its items in creation order.
    ///
    /// # Errors
    /// - `Unauthorized` when the token is malformed or unknown.
    /// - `Repo(InvalidFormat)` / `Repo(NotFound)` for a bad or unknown list id.
    pub fn get_list(
        &self,
        access_token: &str,
        list_id: &str,
    ) -> Result<TodoListView, ServiceError> {
        log_failure("list_get", self.get_list_inner(access_token, list_id))
    }

    fn get_list_inner(
        &self,
        access_token: &str,
        list_id: &str,
    ) -> Result<TodoListView, ServiceError> {
        authorize(&self.identity, access_token)?;
        let list_id = TodoListId::parse(list_id).map_err(RepoError::from)?;
        let items = self.todos.get_todos(list_id.as_str())?;

        let mut names: HashMap<UserId, String> = HashMap::new();
        let mut todos = Vec::with_capacity(items.len());
        for item in items {
            let created_by = match names.get(&item.user_id) {
                Some(name) => name.clone(),
                None => {
                    let name = self.identity.get_user(item.user_id.as_str())?.name;
                    names.insert(item.user_id.clone(), name.clone());
                    name
                }
            };
            todos.push(TodoView { item, created_by });
        }

        info!(
            "event=list_get module=service status=ok list_id={} todo_count={}",
            list_id,
            todos.len()
        );
        Ok(TodoListView { list_id, todos })
    }

    /// Adds a `todo`-status item to an existing list.
    ///
    /// # Errors
    /// - `Unauthorized` when the token is malformed or unknown.
    /// - `InvalidDescription` when `description` fails its pattern.
    /// - `Repo(InvalidFormat)` / `Repo(NotFound)` for a bad or unknown list id.
    pub fn create_todo(
        &self,
        access_token: &str,
        list_id: &str,
        description: &str,
    ) -> Result<TodoView, ServiceError> {
        log_failure(
            "todo_create",
            self.create_todo_inner(access_token, list_id, description),
        )
    }

    fn create_todo_inner(
        &self,
        access_token: &str,
        list_id: &str,
        description: &str,
    ) -> Result<TodoView, ServiceError> {
        let caller = authorize(&self.identity, access_token)?;
        if !is_valid_description(description) {
            return Err(ServiceError::InvalidDescription);
        }
        let list_id = TodoListId::parse(list_id).map_err(RepoError::from)?;
        self.todos.get_todos(list_id.as_str())?;

        let item = self
            .todos
            .create_todo(&list_id, description, &caller.user_id);
        info!(
            "event=todo_create module=service status=ok todo_id={} list_id={} user_id={}",
            item.id, item.list_id, item.user_id
        );
        self.to_view(item)
    }

    /// Moves an item to `status` and persists it with a fresh `updated_at`.
    ///
    /// # Errors
    /// - `Unauthorized` when the token is malformed or unknown.
    /// - `Repo(InvalidFormat)` / `Repo(NotFound)` for a bad or unknown todo id.
    /// - `InvalidTransition` when the state machine rejects the change; the
    ///   stored item is left untouched.
    pub fn update_todo_status(
        &self,
        access_token: &str,
        todo_id: &str,
        status: &str,
    ) -> Result<TodoView, ServiceError> {
        log_failure(
            "todo_update",
            self.update_todo_status_inner(access_token, todo_id, status),
        )
    }

    fn update_todo_status_inner(
        &self,
        access_token: &str,
        todo_id: &str,
        status: &str,
    ) -> Result<TodoView, ServiceError> {
        authorize(&self.identity, access_token)?;
        let stored = self.todos.transition_todo(todo_id, status)?;
        info!(
            "event=todo_update module=service status=ok todo_id={} to={}",
            stored.id, stored.status
        );
        self.to_view(stored)
    }

    fn to_view(&self, item: TodoItem) -> Result<TodoView, ServiceError> {
        let creator = self.identity.get_user(item.user_id.as_str())?;
        Ok(TodoView {
            item,
            created_by: creator.name,
        })
    }
}
