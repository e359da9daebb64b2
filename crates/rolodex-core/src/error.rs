//! Error types for `rolodex-core`.

use thiserror::Error;

/// The abstract category of a core failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// A value could not be turned into a field (bad phone, bad date, ...).
  Validation,
  /// An operation referenced something the record does not hold.
  NotFound,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("The contact name must not be empty")]
  EmptyName,

  #[error("The phone number should contain 10 numbers")]
  InvalidPhone(String),

  #[error("Invalid date format. Use DD.MM.YYYY")]
  InvalidBirthday(String),

  #[error("Phone number not found")]
  PhoneNotFound(String),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::EmptyName | Self::InvalidPhone(_) | Self::InvalidBirthday(_) => {
        ErrorKind::Validation
      }
      Self::PhoneNotFound(_) => ErrorKind::NotFound,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
