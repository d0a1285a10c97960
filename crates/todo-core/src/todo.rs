//! The TODO entity and the input checks applied before any write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Storage-assigned identifier. Never reused once allocated.
pub type TodoId = i64;

/// A single TODO record as held by the store.
///
/// `created_at` is fixed at insertion; `updated_at` is refreshed by the store
/// on every successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
  pub id:          TodoId,
  pub subject:     String,
  pub description: String,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// A subject is required on both create and update.
pub fn validate_subject(subject: &str) -> Result<()> {
  if subject.is_empty() {
    return Err(Error::EmptySubject);
  }
  Ok(())
}

/// Ids are allocated from 1 upwards; zero is the "unset" value of a body.
pub fn validate_id(id: TodoId) -> Result<()> {
  if id <= 0 {
    return Err(Error::InvalidId(id));
  }
  Ok(())
}

pub fn validate_ids(ids: &[TodoId]) -> Result<()> {
  if ids.is_empty() {
    return Err(Error::EmptyIds);
  }
  Ok(())
}
