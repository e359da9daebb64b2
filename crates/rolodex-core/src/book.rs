//! The address book and the upcoming-birthdays query.

use std::{collections::HashMap, fmt};

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::{field::DATE_FORMAT, record::Record};

/// How many days ahead [`AddressBook::get_upcoming_birthdays`] looks,
/// inclusive of the reference day.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

// ─── UpcomingBirthday ────────────────────────────────────────────────────────

/// A contact whose birthday falls inside the upcoming window, with the day
/// they should be congratulated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
  pub name:                String,
  pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
  /// The congratulation date as `DD.MM.YYYY`.
  pub fn formatted_date(&self) -> String {
    self.congratulation_date.format(DATE_FORMAT).to_string()
  }
}

impl fmt::Display for UpcomingBirthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - {}", self.name, self.formatted_date())
  }
}

// ─── AddressBook ─────────────────────────────────────────────────────────────

/// All known contacts, keyed by name.
///
/// Names are unique; adding a record under an existing name replaces the old
/// one in place. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
  records: HashMap<String, Record>,
  order:   Vec<String>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  /// Store `record` under its name, replacing any record already there.
  pub fn add_record(&mut self, record: Record) {
    let name = record.name().as_str().to_owned();
    if self.records.insert(name.clone(), record).is_none() {
      self.order.push(name);
    }
  }

  /// Look up a record. Absence is not an error.
  pub fn find(&self, name: &str) -> Option<&Record> { self.records.get(name) }

  pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
    self.records.get_mut(name)
  }

  /// Remove the record for `name`, if any.
  pub fn delete(&mut self, name: &str) {
    if self.records.remove(name).is_some() {
      self.order.retain(|n| n != name);
    }
  }

  /// All records in insertion order.
  pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
    self.order.iter().filter_map(|name| self.records.get(name))
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Contacts whose next birthday is at most [`UPCOMING_WINDOW_DAYS`] days
  /// after `reference_date` (today counts).
  ///
  /// A birthday on a weekend is congratulated on the following Monday.
  /// Results follow insertion order, not date order.
  pub fn get_upcoming_birthdays(
    &self,
    reference_date: NaiveDate,
  ) -> Vec<UpcomingBirthday> {
    self
      .records()
      .filter_map(|record| {
        let next = next_occurrence(record, reference_date)?;
        let days_until = (next - reference_date).num_days();
        if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
          return None;
        }

        Some(UpcomingBirthday {
          name:                record.name().as_str().to_owned(),
          congratulation_date: roll_off_weekend(next),
        })
      })
      .collect()
  }
}

/// The first occurrence of `record`'s birthday on or after `reference_date`.
fn next_occurrence(record: &Record, reference_date: NaiveDate) -> Option<NaiveDate> {
  let birthday = record.birthday()?;
  let this_year = birthday.in_year(reference_date.year())?;
  if this_year < reference_date {
    birthday.in_year(reference_date.year() + 1)
  } else {
    Some(this_year)
  }
}

/// Move a Saturday or Sunday to the following Monday.
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
  let shift = match date.weekday() {
    Weekday::Sat => 2,
    Weekday::Sun => 1,
    _ => 0,
  };
  date.checked_add_days(Days::new(shift)).unwrap_or(date)
}
