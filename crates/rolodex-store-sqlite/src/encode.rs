//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Phone lists are stored as compact JSON arrays. Birthdays are stored as ISO
//! 8601 dates (`YYYY-MM-DD`), independent of the `DD.MM.YYYY` display format.

use chrono::NaiveDate;
use rolodex_core::{Birthday, Name, Phone, Record};

use crate::{Error, Result};

const ISO_DATE: &str = "%Y-%m-%d";

// ─── Phones ──────────────────────────────────────────────────────────────────

pub fn encode_phones(phones: &[Phone]) -> Result<String> {
  Ok(serde_json::to_string(phones)?)
}

/// Every element is re-validated on the way in.
pub fn decode_phones(s: &str) -> Result<Vec<Phone>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Birthday ────────────────────────────────────────────────────────────────

pub fn encode_birthday(b: Birthday) -> String {
  b.date().format(ISO_DATE).to_string()
}

pub fn decode_birthday(s: &str) -> Result<Birthday> {
  NaiveDate::parse_from_str(s, ISO_DATE)
    .map(Birthday::from_date)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub name:     String,
  pub phones:   String,
  pub birthday: Option<String>,
}

impl RawContact {
  /// Flatten a record into column values.
  pub fn from_record(record: &Record) -> Result<Self> {
    Ok(Self {
      name:     record.name().as_str().to_owned(),
      phones:   encode_phones(record.phones())?,
      birthday: record.birthday().map(encode_birthday),
    })
  }

  pub fn into_record(self) -> Result<Record> {
    let name = Name::new(self.name)?;
    let phones = decode_phones(&self.phones)?;
    let birthday = self.birthday.as_deref().map(decode_birthday).transpose()?;
    Ok(Record::from_parts(name, phones, birthday))
  }
}
