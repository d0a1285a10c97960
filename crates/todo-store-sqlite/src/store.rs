//! [`SqliteStore`]: the SQLite implementation of [`TodoStore`].

use std::path::Path;

use todo_core::{Page, Todo, TodoId, TodoStore};

use crate::{encode::RawTodo, schema::SCHEMA, Error, Result};

// ─── Statements ──────────────────────────────────────────────────────────────

const INSERT: &str = "INSERT INTO todos (subject, description) VALUES (?1, ?2)";

const CONFIRM: &str = "SELECT id, subject, description, created_at, updated_at
   FROM todos WHERE id = ?1";

const READ: &str = "SELECT id, subject, description, created_at, updated_at
   FROM todos ORDER BY id DESC LIMIT ?1";

const READ_BEFORE: &str = "SELECT id, subject, description, created_at, updated_at
   FROM todos WHERE id < ?1 ORDER BY id DESC LIMIT ?2";

const UPDATE: &str = "UPDATE todos SET subject = ?1, description = ?2 WHERE id = ?3";

/// `?1, ?2, …, ?n`, one positional placeholder per bound value.
pub(crate) fn in_placeholders(n: usize) -> String {
  (1..=n)
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ")
}

fn query_todos(
  conn:   &rusqlite::Connection,
  sql:    &str,
  params: impl rusqlite::Params,
) -> rusqlite::Result<Vec<RawTodo>> {
  let mut stmt = conn.prepare(sql)?;
  stmt.query_map(params, RawTodo::from_row)?.collect()
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A TODO store backed by a single SQLite file.
///
/// Cheap to clone; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a store backed by an in-memory database.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TodoStore impl ──────────────────────────────────────────────────────────

impl TodoStore for SqliteStore {
  type Error = Error;

  async fn create_todo(&self, subject: String, description: String) -> Result<Todo> {
    // Insert and confirm share one closure, so no other call on this
    // connection can run between them.
    let raw: RawTodo = self
      .conn
      .call(move |conn| {
        conn.execute(INSERT, rusqlite::params![subject, description])?;
        let id = conn.last_insert_rowid();
        Ok(conn.query_row(CONFIRM, rusqlite::params![id], RawTodo::from_row)?)
      })
      .await?;

    raw.into_todo()
  }

  async fn read_todos(&self, page: Page) -> Result<Vec<Todo>> {
    if page.size == 0 {
      return Ok(Vec::new());
    }

    // SQLite reads a negative LIMIT as "no limit".
    let size   = page.size;
    let cursor = page.cursor();

    let raws: Vec<RawTodo> = self
      .conn
      .call(move |conn| {
        let rows = match cursor {
          Some(prev_id) => query_todos(conn, READ_BEFORE, rusqlite::params![prev_id, size])?,
          None          => query_todos(conn, READ, rusqlite::params![size])?,
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTodo::into_todo).collect()
  }

  async fn update_todo(
    &self,
    id:          TodoId,
    subject:     String,
    description: String,
  ) -> Result<Todo> {
    let raw: Option<RawTodo> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(UPDATE, rusqlite::params![subject, description, id])?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(Some(conn.query_row(CONFIRM, rusqlite::params![id], RawTodo::from_row)?))
      })
      .await?;

    raw.ok_or(Error::TodoNotFound(id))?.into_todo()
  }

  async fn delete_todos(&self, ids: Vec<TodoId>) -> Result<()> {
    if ids.is_empty() {
      return Ok(());
    }

    // Only placeholders are formatted into the statement; ids are bound.
    let sql    = format!("DELETE FROM todos WHERE id IN ({})", in_placeholders(ids.len()));
    let wanted = ids.clone();

    let deleted = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params_from_iter(ids.iter()))?))
      .await
      .map_err(Error::Delete)?;

    if deleted == 0 {
      return Err(Error::TodosNotFound(wanted));
    }
    Ok(())
  }
}
