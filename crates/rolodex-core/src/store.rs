//! The `BookStore` trait, the persistence contract for an [`AddressBook`].
//!
//! The trait is implemented by storage backends (e.g. `rolodex-store-sqlite`).
//! The CLI depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::book::AddressBook;

/// Abstraction over a place an address book is kept between runs.
///
/// Both methods return `Send` futures so a store can be driven from a
/// multi-threaded tokio runtime.
pub trait BookStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the stored book. A store with no prior state yields an empty book.
  fn load(&self) -> impl Future<Output = Result<AddressBook, Self::Error>> + Send + '_;

  /// Replace the stored state with `book`.
  ///
  /// Names, phone order, birthdays and contact order must all survive a
  /// `save` followed by a `load`.
  fn save<'a>(
    &'a self,
    book: &'a AddressBook,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
