//! Error types for `todo-core`.

use thiserror::Error;

use crate::todo::TodoId;

/// Input rejected before it reaches a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("subject must not be empty")]
  EmptySubject,

  #[error("invalid todo id: {0}")]
  InvalidId(TodoId),

  #[error("ids must not be empty")]
  EmptyIds,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
