//! Core types and trait definitions for the Rolodex address book.
//!
//! This crate is deliberately free of I/O. Field validation, the record
//! model, the address book and the upcoming-birthdays query all live here;
//! persistence is reached only through the [`store::BookStore`] trait.

pub mod book;
pub mod error;
pub mod field;
pub mod record;
pub mod store;

pub use book::{AddressBook, UpcomingBirthday};
pub use error::{Error, ErrorKind, Result};
pub use field::{Birthday, Name, Phone};
pub use record::Record;
