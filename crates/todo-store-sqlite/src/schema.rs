//! SQL schema for the TODO SQLite store.
//!
//! Executed on every connection open. `user_version` records the revision of
//! the DDL below; revision 2 replaced the `updated_at` trigger, which is why
//! the trigger is dropped and recreated rather than guarded.

/// Full schema DDL; safe to run repeatedly.
///
/// Timestamps are ISO 8601 UTC strings with millisecond precision, so they
/// order correctly as plain text.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from being reused after the newest row is deleted.
CREATE TABLE IF NOT EXISTS todos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    subject     TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

-- updated_at moves to now, or one millisecond past its previous value when
-- the write lands within the same millisecond, so it always advances.
DROP TRIGGER IF EXISTS todos_touch_updated_at;
CREATE TRIGGER todos_touch_updated_at
AFTER UPDATE OF subject, description ON todos
FOR EACH ROW
BEGIN
    UPDATE todos
       SET updated_at = max(
             strftime('%Y-%m-%dT%H:%M:%fZ', 'now'),
             strftime('%Y-%m-%dT%H:%M:%fZ', OLD.updated_at, '+0.001 seconds')
           )
     WHERE id = NEW.id;
END;

PRAGMA user_version = 2;
";
