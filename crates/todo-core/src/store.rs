//! The `TodoStore` trait and its paging parameters.
//!
//! Implemented by storage backends (e.g. `todo-store-sqlite`). The HTTP layer
//! depends on this abstraction, not on a concrete backend.

use std::future::Future;

use crate::todo::{Todo, TodoId};

// ─── Paging ──────────────────────────────────────────────────────────────────

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Keyset cursor for [`TodoStore::read_todos`].
///
/// Rows come back newest first. To fetch the next page, pass the id of the
/// last row already seen as `prev_id`; rows inserted in between never shift
/// the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  /// Only rows with an id strictly below this are returned. `<= 0` means
  /// "start from the newest row".
  pub prev_id: TodoId,
  /// `0` yields an empty page; a negative size lifts the limit.
  pub size:    i64,
}

impl Page {
  pub fn new(prev_id: TodoId, size: i64) -> Self { Self { prev_id, size } }

  /// The effective cursor, if any.
  pub fn cursor(&self) -> Option<TodoId> { (self.prev_id > 0).then_some(self.prev_id) }
}

impl Default for Page {
  fn default() -> Self { Self::new(0, DEFAULT_PAGE_SIZE) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Persistence for TODO entities.
///
/// Every write re-reads the affected row so callers always see the values the
/// store assigned (id, timestamps). Implementations never log; they report
/// failures through [`Self::Error`].
pub trait TodoStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new TODO and return it as stored.
  fn create_todo(
    &self,
    subject: String,
    description: String,
  ) -> impl Future<Output = Result<Todo, Self::Error>> + Send + '_;

  /// Return up to `page.size` TODOs ordered by id descending.
  ///
  /// A negative size returns every row past the cursor.
  ///
  /// Never fails for lack of rows: an exhausted feed is an empty vector.
  fn read_todos(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Todo>, Self::Error>> + Send + '_;

  /// Overwrite subject and description of an existing TODO.
  ///
  /// Fails with a not-found error when `id` matches no row.
  fn update_todo(
    &self,
    id: TodoId,
    subject: String,
    description: String,
  ) -> impl Future<Output = Result<Todo, Self::Error>> + Send + '_;

  /// Delete every TODO whose id is in `ids`.
  ///
  /// An empty slice is a no-op. Fails with a not-found error only when none
  /// of the ids matched.
  fn delete_todos(
    &self,
    ids: Vec<TodoId>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_page_starts_at_newest() {
    let page = Page::default();
    assert_eq!(page.size, DEFAULT_PAGE_SIZE);
    assert_eq!(page.cursor(), None);
  }

  #[test]
  fn non_positive_prev_id_has_no_cursor() {
    assert_eq!(Page::new(0, 5).cursor(), None);
    assert_eq!(Page::new(-7, 5).cursor(), None);
    assert_eq!(Page::new(42, 5).cursor(), Some(42));
  }
}
