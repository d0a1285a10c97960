//! Integration tests for `SqliteStore` against an in-memory database.

use todo_core::{Page, TodoId, TodoStore};

use crate::{encode::decode_dt, store::in_placeholders, Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn seed(s: &SqliteStore, n: usize) -> Vec<TodoId> {
  let mut ids = Vec::with_capacity(n);
  for i in 1..=n {
    let todo = s
      .create_todo(format!("task {i}"), String::new())
      .await
      .unwrap();
    ids.push(todo.id);
  }
  ids
}

fn ids_of(todos: &[todo_core::Todo]) -> Vec<TodoId> {
  todos.iter().map(|t| t.id).collect()
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_and_equal_timestamps() {
  let s = store().await;

  let todo = s
    .create_todo("buy milk".into(), "2 litres".into())
    .await
    .unwrap();

  assert!(todo.id > 0);
  assert_eq!(todo.subject, "buy milk");
  assert_eq!(todo.description, "2 litres");
  assert_eq!(todo.created_at, todo.updated_at);
}

#[tokio::test]
async fn create_then_read_includes_the_new_todo() {
  let s = store().await;
  let created = s.create_todo("buy milk".into(), String::new()).await.unwrap();

  let todos = s.read_todos(Page::new(0, 10)).await.unwrap();
  assert_eq!(todos, vec![created]);
}

#[tokio::test]
async fn ids_are_monotonic_and_not_reused() {
  let s   = store().await;
  let ids = seed(&s, 2).await;
  assert!(ids[1] > ids[0]);

  // Deleting the newest row must not free its id for the next insert.
  s.delete_todos(vec![ids[1]]).await.unwrap();
  let next = s.create_todo("again".into(), String::new()).await.unwrap();
  assert!(next.id > ids[1]);
}

// ─── Read ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn read_size_zero_is_empty() {
  let s = store().await;
  seed(&s, 3).await;

  let todos = s.read_todos(Page::new(0, 0)).await.unwrap();
  assert!(todos.is_empty());
}

#[tokio::test]
async fn read_empty_store_is_empty_vec() {
  let s = store().await;
  let todos = s.read_todos(Page::default()).await.unwrap();
  assert!(todos.is_empty());
}

#[tokio::test]
async fn read_is_newest_first_and_limited() {
  let s   = store().await;
  let ids = seed(&s, 5).await;

  let todos = s.read_todos(Page::new(0, 3)).await.unwrap();
  assert_eq!(ids_of(&todos), vec![ids[4], ids[3], ids[2]]);
}

#[tokio::test]
async fn keyset_pages_are_disjoint_and_cover_everything() {
  let s   = store().await;
  let ids = seed(&s, 5).await;

  let first = s.read_todos(Page::new(0, 2)).await.unwrap();
  assert_eq!(ids_of(&first), vec![ids[4], ids[3]]);

  // A concurrent insert between pages must not shift the window.
  s.create_todo("late arrival".into(), String::new()).await.unwrap();

  let last_seen = first.last().unwrap().id;
  let second    = s.read_todos(Page::new(last_seen, 2)).await.unwrap();
  assert_eq!(ids_of(&second), vec![ids[2], ids[1]]);

  let last_seen = second.last().unwrap().id;
  let third     = s.read_todos(Page::new(last_seen, 2)).await.unwrap();
  assert_eq!(ids_of(&third), vec![ids[0]]);

  let last_seen = third.last().unwrap().id;
  let rest      = s.read_todos(Page::new(last_seen, 2)).await.unwrap();
  assert!(rest.is_empty());
}

#[tokio::test]
async fn negative_size_reads_without_limit() {
  let s   = store().await;
  let ids = seed(&s, 12).await;

  let todos = s.read_todos(Page::new(0, -1)).await.unwrap();
  assert_eq!(todos.len(), 12);

  let older = s.read_todos(Page::new(ids[5], -1)).await.unwrap();
  assert_eq!(ids_of(&older), ids[..5].iter().rev().copied().collect::<Vec<_>>());
}

#[tokio::test]
async fn size_beyond_u32_is_accepted() {
  let s = store().await;
  seed(&s, 3).await;

  let todos = s.read_todos(Page::new(0, 5_000_000_000)).await.unwrap();
  assert_eq!(todos.len(), 3);
}

#[tokio::test]
async fn negative_prev_id_reads_from_newest() {
  let s   = store().await;
  let ids = seed(&s, 2).await;

  let todos = s.read_todos(Page::new(-1, 10)).await.unwrap();
  assert_eq!(ids_of(&todos), vec![ids[1], ids[0]]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_and_advances_updated_at() {
  let s       = store().await;
  let created = s.create_todo("buy milk".into(), String::new()).await.unwrap();

  let updated = s
    .update_todo(created.id, "buy milk and eggs".into(), "corner shop".into())
    .await
    .unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.subject, "buy milk and eggs");
  assert_eq!(updated.description, "corner shop");
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);

  let stored = s.read_todos(Page::default()).await.unwrap();
  assert_eq!(stored, vec![updated]);
}

#[tokio::test]
async fn back_to_back_writes_always_advance_updated_at() {
  let s = store().await;

  for round in 0..50 {
    let created = s.create_todo(format!("task {round}"), String::new()).await.unwrap();
    let first   = s.update_todo(created.id, "first".into(), String::new()).await.unwrap();
    let second  = s.update_todo(created.id, "second".into(), String::new()).await.unwrap();

    assert!(first.updated_at > created.updated_at, "round {round}: {first:?} vs {created:?}");
    assert!(second.updated_at > first.updated_at, "round {round}: {second:?} vs {first:?}");
    assert_eq!(second.created_at, created.created_at);
  }
}

#[tokio::test]
async fn update_returns_the_updated_row_not_the_newest() {
  let s   = store().await;
  let ids = seed(&s, 3).await;

  let updated = s.update_todo(ids[0], "first".into(), String::new()).await.unwrap();
  assert_eq!(updated.id, ids[0]);
  assert_eq!(updated.subject, "first");
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
  let s = store().await;

  let err = s.update_todo(99, "nope".into(), String::new()).await.unwrap_err();
  assert!(matches!(err, Error::TodoNotFound(99)));
  assert!(err.is_not_found());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_empty_ids_is_noop() {
  let s = store().await;
  seed(&s, 2).await;

  s.delete_todos(vec![]).await.unwrap();
  assert_eq!(s.read_todos(Page::default()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_removes_all_listed_rows() {
  let s   = store().await;
  let ids = seed(&s, 3).await;

  s.delete_todos(vec![ids[0], ids[2]]).await.unwrap();

  let rest = s.read_todos(Page::default()).await.unwrap();
  assert_eq!(ids_of(&rest), vec![ids[1]]);
}

#[tokio::test]
async fn delete_only_missing_ids_is_not_found() {
  let s = store().await;
  seed(&s, 1).await;

  let err = s.delete_todos(vec![100, 101]).await.unwrap_err();
  assert!(matches!(&err, Error::TodosNotFound(ids) if ids == &vec![100, 101]));
  assert!(err.is_not_found());
  assert_eq!(s.read_todos(Page::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_mixed_ids_succeeds() {
  let s   = store().await;
  let ids = seed(&s, 2).await;

  s.delete_todos(vec![ids[0], 500]).await.unwrap();

  let rest = s.read_todos(Page::default()).await.unwrap();
  assert_eq!(ids_of(&rest), vec![ids[1]]);
}

#[tokio::test]
async fn delete_binds_ids_as_values() {
  let s   = store().await;
  let ids = seed(&s, 2).await;

  // Duplicates are harmless; every id is a bound parameter.
  s.delete_todos(vec![ids[0], ids[0]]).await.unwrap();
  assert_eq!(s.read_todos(Page::default()).await.unwrap().len(), 1);
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

#[test]
fn placeholders_match_count() {
  assert_eq!(in_placeholders(1), "?1");
  assert_eq!(in_placeholders(3), "?1, ?2, ?3");
}

#[test]
fn decode_dt_accepts_sqlite_millis() {
  let dt = decode_dt("2024-05-01T12:30:00.250Z").unwrap();
  assert_eq!(dt.timestamp_millis() % 1000, 250);
  assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
}
