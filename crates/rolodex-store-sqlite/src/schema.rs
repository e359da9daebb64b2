//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per contact. The whole table is rewritten on every save.
CREATE TABLE IF NOT EXISTS contacts (
    position  INTEGER NOT NULL UNIQUE,   -- insertion order within the book
    name      TEXT PRIMARY KEY,
    phones    TEXT NOT NULL DEFAULT '[]', -- JSON array of phone strings
    birthday  TEXT                        -- ISO 8601 date or NULL
);

PRAGMA user_version = 1;
";
