//! Error type for `todo-store-sqlite`.

use thiserror::Error;
use todo_core::TodoId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("failed to delete todos: {0}")]
  Delete(#[source] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// An update matched no row.
  #[error("todo not found: {0}")]
  TodoNotFound(TodoId),

  /// A delete matched none of the requested ids.
  #[error("no todos found for ids {0:?}")]
  TodosNotFound(Vec<TodoId>),
}

impl Error {
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::TodoNotFound(_) | Error::TodosNotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
