//! Decoding between SQLite rows and [`Todo`].
//!
//! Timestamps are stored as RFC 3339 strings written by SQLite itself.

use chrono::{DateTime, Utc};
use todo_core::{Todo, TodoId};

use crate::{Error, Result};

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// A `todos` row before timestamp decoding.
///
/// Column order matches [`crate::store`]'s `SELECT` lists.
pub struct RawTodo {
  pub id:          TodoId,
  pub subject:     String,
  pub description: String,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawTodo {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawTodo {
      id:          row.get(0)?,
      subject:     row.get(1)?,
      description: row.get(2)?,
      created_at:  row.get(3)?,
      updated_at:  row.get(4)?,
    })
  }

  pub fn into_todo(self) -> Result<Todo> {
    Ok(Todo {
      id:          self.id,
      subject:     self.subject,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}
