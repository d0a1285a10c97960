//! Handlers for the `/todos` resource.
//!
//! | Method   | Input | Success | Store failure |
//! |----------|-------|---------|---------------|
//! | `GET`    | `?prev_id`, `?size` (default 10) | `{"todos":[...]}` | 500 |
//! | `POST`   | `{"subject","description"}` | `{"todo":{...}}` | 400 |
//! | `PUT`    | `{"id","subject","description"}` | `{"todo":{...}}` | 400 |
//! | `DELETE` | `{"ids":[...]}` | `{}` | 404 |
//!
//! Malformed input is always a 400 and never reaches the store. Bodies are
//! decoded from raw bytes so a missing `Content-Type` or a type mismatch is a
//! plain 400 rather than axum's 415/422 rejections.

use std::sync::Arc;

use axum::{
  extract::{Query, State, rejection::QueryRejection},
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use todo_core::{
  Page, Todo, TodoId, TodoStore,
  store::DEFAULT_PAGE_SIZE,
  todo::{validate_id, validate_ids, validate_subject},
};

use crate::error::ApiError;

// ─── Encoding ─────────────────────────────────────────────────────────────────

/// Serialise `body` as the JSON response.
///
/// An encoding failure is logged and turned into a bare 500; the handler's
/// work has already been committed by then.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
  match serde_json::to_vec(body) {
    Ok(bytes) => (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
    Err(e) => {
      tracing::error!(error = %e, "failed to encode response body");
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
  serde_json::from_slice(body).map_err(|e| {
    tracing::debug!(error = %e, "rejected request body");
    ApiError::BadRequest(format!("invalid JSON body: {e}"))
  })
}

// ─── Read ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReadParams {
  /// Id of the last row already seen; omitted or `0` starts at the newest.
  pub prev_id: Option<TodoId>,
  /// Any integer; see [`Page::size`].
  pub size:    Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ReadTodoResponse {
  pub todos: Vec<Todo>,
}

/// `GET /todos[?prev_id=<id>][&size=<n>]`
pub async fn read<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<ReadParams>, QueryRejection>,
) -> Result<Response, ApiError>
where
  S: TodoStore,
{
  let Query(params) = params.map_err(|rejection| {
    tracing::debug!(%rejection, "rejected query parameters");
    ApiError::BadRequest(rejection.body_text())
  })?;

  let page = Page::new(
    params.prev_id.unwrap_or(0),
    params.size.unwrap_or(DEFAULT_PAGE_SIZE),
  );

  let todos = store.read_todos(page).await.map_err(|e| {
    tracing::warn!(error = %e, ?page, "failed to read todos");
    ApiError::Store(Box::new(e))
  })?;

  Ok(json_response(StatusCode::OK, &ReadTodoResponse { todos }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
  #[serde(default)]
  pub subject:     String,
  #[serde(default)]
  pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
  pub todo: Todo,
}

/// `POST /todos`, body: `{"subject":"...","description":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Response, ApiError>
where
  S: TodoStore,
{
  let req: CreateTodoRequest = parse_body(&body)?;
  validate_subject(&req.subject)?;

  // Store failures surface as 400 here, not 500.
  let todo = store
    .create_todo(req.subject, req.description)
    .await
    .map_err(|e| {
      tracing::warn!(error = %e, "failed to create todo");
      ApiError::BadRequest(format!("failed to create todo: {e}"))
    })?;

  Ok(json_response(StatusCode::OK, &CreateTodoResponse { todo }))
}

// ─── Update ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
  #[serde(default)]
  pub id:          TodoId,
  #[serde(default)]
  pub subject:     String,
  #[serde(default)]
  pub description: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateTodoResponse {
  pub todo: Todo,
}

/// `PUT /todos`, body: `{"id":1,"subject":"...","description":"..."}`
///
/// An unknown id is reported as 400, like any other store failure.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Response, ApiError>
where
  S: TodoStore,
{
  let req: UpdateTodoRequest = parse_body(&body)?;
  validate_id(req.id)?;
  validate_subject(&req.subject)?;

  let id   = req.id;
  let todo = store
    .update_todo(id, req.subject, req.description)
    .await
    .map_err(|e| {
      tracing::warn!(error = %e, id, "failed to update todo");
      ApiError::BadRequest(format!("failed to update todo: {e}"))
    })?;

  Ok(json_response(StatusCode::OK, &UpdateTodoResponse { todo }))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DeleteTodoRequest {
  #[serde(default)]
  pub ids: Vec<TodoId>,
}

/// Always serialises as `{}`.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {}

/// `DELETE /todos`, body: `{"ids":[1,2,3]}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Response, ApiError>
where
  S: TodoStore,
{
  let req: DeleteTodoRequest = parse_body(&body)?;
  validate_ids(&req.ids)?;

  let count = req.ids.len();
  store.delete_todos(req.ids).await.map_err(|e| {
    tracing::warn!(error = %e, count, "failed to delete todos");
    ApiError::NotFound(e.to_string())
  })?;

  Ok(json_response(StatusCode::OK, &DeleteTodoResponse {}))
}
