//! [`SqliteStore`]: the SQLite implementation of [`BookStore`].

use std::path::Path;

use rolodex_core::{AddressBook, store::BookStore};

use crate::{Result, encode::RawContact, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address book kept in a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
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

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for SqliteStore {
  type Error = crate::Error;

  async fn load(&self) -> Result<AddressBook> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT name, phones, birthday FROM contacts ORDER BY position",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawContact {
              name:     row.get(0)?,
              phones:   row.get(1)?,
              birthday: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut book = AddressBook::new();
    for raw in raws {
      book.add_record(raw.into_record()?);
    }

    tracing::debug!(contacts = book.len(), "loaded address book");
    Ok(book)
  }

  async fn save(&self, book: &AddressBook) -> Result<()> {
    let raws: Vec<RawContact> = book
      .records()
      .map(RawContact::from_record)
      .collect::<Result<_>>()?;
    let count = raws.len();

    // Full rewrite; the previous rows survive until commit.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM contacts", [])?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO contacts (position, name, phones, birthday)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for (position, raw) in raws.into_iter().enumerate() {
            stmt.execute(rusqlite::params![
              position as i64,
              raw.name,
              raw.phones,
              raw.birthday,
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::debug!(contacts = count, "saved address book");
    Ok(())
  }
}
