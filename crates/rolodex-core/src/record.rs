//! A single contact.

use std::fmt;

use crate::{
  Error, Result,
  field::{Birthday, Name, Phone},
};

/// One contact: a name, an ordered list of phone numbers and an optional
/// birthday.
///
/// The name is fixed at construction. Phones may repeat; their order is the
/// order they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  name:     Name,
  phones:   Vec<Phone>,
  birthday: Option<Birthday>,
}

impl Record {
  /// Create a record with no phones and no birthday.
  pub fn new(name: impl Into<String>) -> Result<Self> {
    Ok(Self::from_name(Name::new(name)?))
  }

  pub fn from_name(name: Name) -> Self {
    Self { name, phones: Vec::new(), birthday: None }
  }

  /// Reassemble a record from already-validated parts, e.g. when loading
  /// from a store.
  pub fn from_parts(
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
  ) -> Self {
    Self { name, phones, birthday }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phones(&self) -> &[Phone] { &self.phones }

  pub fn birthday(&self) -> Option<Birthday> { self.birthday }

  // ── Phones ────────────────────────────────────────────────────────────

  /// Validate `value` and append it. Duplicates are allowed.
  pub fn add_phone(&mut self, value: &str) -> Result<()> {
    self.phones.push(Phone::new(value)?);
    Ok(())
  }

  /// Remove the first phone equal to `value`.
  pub fn remove_phone(&mut self, value: &str) -> Result<()> {
    let index = self.position_of(value)?;
    self.phones.remove(index);
    Ok(())
  }

  /// Replace the first phone equal to `old` with `new`, keeping its
  /// position. The record is untouched if either step fails.
  pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
    let index = self.position_of(old)?;
    self.phones[index] = Phone::new(new)?;
    Ok(())
  }

  pub fn find_phone(&self, value: &str) -> Result<&Phone> {
    self
      .phones
      .iter()
      .find(|p| *p == value)
      .ok_or_else(|| Error::PhoneNotFound(value.to_owned()))
  }

  fn position_of(&self, value: &str) -> Result<usize> {
    self
      .phones
      .iter()
      .position(|p| p == value)
      .ok_or_else(|| Error::PhoneNotFound(value.to_owned()))
  }

  // ── Birthday ──────────────────────────────────────────────────────────

  /// Parse `value` as `DD.MM.YYYY` and set it, replacing any earlier
  /// birthday.
  pub fn add_birthday(&mut self, value: &str) -> Result<()> {
    self.birthday = Some(Birthday::parse(value)?);
    Ok(())
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Contact name: {}, phones: ", self.name)?;
    for (i, phone) in self.phones.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{phone}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ErrorKind;

  fn john() -> Record {
    let mut record = Record::new("John").unwrap();
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();
    record
  }

  #[test]
  fn add_phone_keeps_order_and_duplicates() {
    let mut record = john();
    record.add_phone("1234567890").unwrap();

    let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, ["1234567890", "5555555555", "1234567890"]);
  }

  #[test]
  fn add_phone_rejects_bad_length() {
    let mut record = john();
    let err = record.add_phone("12345").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(record.phones().len(), 2);
  }

  #[test]
  fn edit_phone_replaces_in_place() {
    let mut record = john();
    record.edit_phone("1234567890", "1112223333").unwrap();

    assert_eq!(record.phones()[0].as_str(), "1112223333");
    assert_eq!(record.find_phone("1112223333").unwrap().as_str(), "1112223333");

    let err = record.find_phone("1234567890").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
  }

  #[test]
  fn edit_phone_only_touches_first_match() {
    let mut record = john();
    record.add_phone("1234567890").unwrap();
    record.edit_phone("1234567890", "0000000000").unwrap();

    let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, ["0000000000", "5555555555", "1234567890"]);
  }

  #[test]
  fn edit_phone_errors_leave_record_unchanged() {
    let mut record = john();
    let before = record.clone();

    let missing = record.edit_phone("9999999999", "1112223333").unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);

    let invalid = record.edit_phone("1234567890", "111").unwrap_err();
    assert_eq!(invalid.kind(), ErrorKind::Validation);

    assert_eq!(record, before);
  }

  #[test]
  fn remove_phone_twice_fails_the_second_time() {
    let mut record = john();
    record.remove_phone("5555555555").unwrap();
    assert_eq!(record.phones().len(), 1);

    let err = record.remove_phone("5555555555").unwrap_err();
    assert!(matches!(err, Error::PhoneNotFound(ref v) if v == "5555555555"));
  }

  #[test]
  fn add_birthday_overwrites() {
    let mut record = john();
    assert!(record.birthday().is_none());

    record.add_birthday("01.01.1990").unwrap();
    record.add_birthday("02.02.1992").unwrap();
    assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");

    let err = record.add_birthday("1992-02-02").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
  }

  #[test]
  fn display_lists_phones_without_birthday() {
    let mut record = john();
    record.add_birthday("01.01.1990").unwrap();
    assert_eq!(
      record.to_string(),
      "Contact name: John, phones: 1234567890; 5555555555"
    );
    assert_eq!(
      Record::new("Jane").unwrap().to_string(),
      "Contact name: Jane, phones: "
    );
  }
}
