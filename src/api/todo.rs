//! Todo Endpoints
//!
//! CRUD wrappers for `/todos`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{decode_json, with_json, ApiClient, ApiResult, ClientHooks, HttpMethod, Transport};
use crate::models::{Todo, TodoDraft};
use crate::notice::Operation;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTodoBody<'a> {
    title: &'a str,
    due_date: DateTime<Utc>,
    description: &'a str,
    status: bool,
}

/// List responses are a bare array or wrapped in `{ "todos": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum TodoListBody {
    Plain(Vec<Todo>),
    Wrapped { todos: Vec<Todo> },
}

impl<T: Transport, H: ClientHooks> ApiClient<T, H> {
    pub async fn list_todos(&self, token: &str) -> ApiResult<Vec<Todo>> {
        let request = self.request(HttpMethod::Get, "/todos", Some(token));
        self.call(Operation::ListTodos, Ok(request), |body| {
            decode_json::<TodoListBody>(body).map(|list| match list {
                TodoListBody::Plain(todos) | TodoListBody::Wrapped { todos } => todos,
            })
        })
        .await
    }

    pub async fn create_todo(&self, token: &str, draft: &TodoDraft) -> ApiResult<Todo> {
        let request = with_json(self.request(HttpMethod::Post, "/todos", Some(token)), draft);
        self.call(Operation::CreateTodo, request, decode_json).await
    }

    pub async fn get_todo(&self, token: &str, id: &str) -> ApiResult<Todo> {
        let request = self.request(HttpMethod::Get, &Self::todo_path(id), Some(token));
        self.call(Operation::GetTodo, Ok(request), decode_json).await
    }

    /// Save title, description, due date and status as given
    pub async fn update_todo(&self, token: &str, id: &str, todo: &Todo) -> ApiResult<Todo> {
        self.put_todo(Operation::UpdateTodo, token, id, todo, todo.status).await
    }

    /// Same payload as an update, with the status forced to done
    pub async fn complete_todo(&self, token: &str, id: &str, todo: &Todo) -> ApiResult<Todo> {
        self.put_todo(Operation::CompleteTodo, token, id, todo, true).await
    }

    pub async fn delete_todo(&self, token: &str, id: &str) -> ApiResult<()> {
        let request = self.request(HttpMethod::Delete, &Self::todo_path(id), Some(token));
        self.call(Operation::DeleteTodo, Ok(request), |_| Ok(())).await
    }

    async fn put_todo(&self, op: Operation, token: &str, id: &str, todo: &Todo, status: bool) -> ApiResult<Todo> {
        let body = UpdateTodoBody {
            title: &todo.title,
            due_date: todo.due_date,
            description: &todo.description,
            status,
        };
        let request = with_json(self.request(HttpMethod::Put, &Self::todo_path(id), Some(token)), &body);
        self.call(op, request, decode_json).await
    }
}
