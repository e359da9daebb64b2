//! Field values: the validated scalars a [`Record`](crate::record::Record)
//! is built from.
//!
//! Each type can only be constructed through its validating constructor, so a
//! value that exists is a value that passed validation. Deserialisation goes
//! through the same constructors.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The textual pattern birthdays are parsed from and rendered to.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The exact number of characters a phone number must have.
pub const PHONE_LEN: usize = 10;

// ─── Name ────────────────────────────────────────────────────────────────────

/// A contact name. Any non-empty string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    if value.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for Name {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::new(value) }
}

impl From<Name> for String {
  fn from(name: Name) -> Self { name.0 }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// A phone number of exactly [`PHONE_LEN`] characters.
///
/// Only the length is checked; the characters themselves are not required to
/// be digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    if value.chars().count() != PHONE_LEN {
      return Err(Error::InvalidPhone(value));
    }
    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for Phone {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::new(value) }
}

impl From<Phone> for String {
  fn from(phone: Phone) -> Self { phone.0 }
}

impl PartialEq<str> for Phone {
  fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Birthday ────────────────────────────────────────────────────────────────

/// A calendar date, written as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
  /// Parse a `DD.MM.YYYY` string.
  pub fn parse(value: &str) -> Result<Self> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
      .map(Self)
      .map_err(|_| Error::InvalidBirthday(value.to_owned()))
  }

  pub fn from_date(date: NaiveDate) -> Self { Self(date) }

  pub fn date(&self) -> NaiveDate { self.0 }

  /// This birthday's month and day in `year`.
  ///
  /// A 29 February birthday lands on 28 February in non-leap years. Returns
  /// `None` only when `year` is outside chrono's representable range.
  pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).or_else(|| {
      (self.0.month() == 2 && self.0.day() == 29)
        .then(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .flatten()
    })
  }
}

impl FromStr for Birthday {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl fmt::Display for Birthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format(DATE_FORMAT))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ErrorKind;

  #[test]
  fn phone_of_ten_characters_is_kept_verbatim() {
    let phone = Phone::new("0501234567").unwrap();
    assert_eq!(phone.as_str(), "0501234567");
    assert_eq!(phone.to_string(), "0501234567");
  }

  #[test]
  fn phone_length_is_the_only_rule() {
    assert!(Phone::new("abcdefghij").is_ok());
    assert!(Phone::new("ёёёёёёёёёё").is_ok());
  }

  #[test]
  fn phone_of_any_other_length_is_rejected() {
    for value in ["", "123", "123456789", "12345678901", "+380501234567"] {
      let err = Phone::new(value).unwrap_err();
      assert_eq!(err.kind(), ErrorKind::Validation, "{value:?}");
      assert!(matches!(err, Error::InvalidPhone(ref v) if v == value));
    }
  }

  #[test]
  fn empty_name_is_rejected() {
    assert!(matches!(Name::new(""), Err(Error::EmptyName)));
    assert_eq!(Name::new("John").unwrap().as_str(), "John");
  }

  #[test]
  fn birthday_formats_back_to_its_input() {
    for value in ["01.01.2000", "29.02.2024", "31.12.1999", "15.06.1985"] {
      let birthday = Birthday::parse(value).unwrap();
      assert_eq!(birthday.to_string(), value);
    }
  }

  #[test]
  fn malformed_birthdays_are_rejected() {
    for value in ["", "2000-01-01", "31.02.2000", "1.1", "32.01.2000", "abc"] {
      let err = Birthday::parse(value).unwrap_err();
      assert_eq!(err.kind(), ErrorKind::Validation, "{value:?}");
    }
  }

  #[test]
  fn leap_day_falls_back_to_feb_28() {
    let birthday = Birthday::parse("29.02.2000").unwrap();
    assert_eq!(
      birthday.in_year(2023),
      NaiveDate::from_ymd_opt(2023, 2, 28)
    );
    assert_eq!(
      birthday.in_year(2024),
      NaiveDate::from_ymd_opt(2024, 2, 29)
    );
  }

  #[test]
  fn phone_deserialisation_validates() {
    let ok: Phone = serde_json::from_str("\"0501234567\"").unwrap();
    assert_eq!(ok.as_str(), "0501234567");
    assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
  }
}
