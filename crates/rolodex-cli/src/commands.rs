//! Command handlers, one function per bot command.
//!
//! Each handler performs a single operation on the [`AddressBook`] and
//! returns the line to print. Failures come back as [`CommandError`], which
//! the dispatcher renders as `Error: <message>`.

use chrono::NaiveDate;
use rolodex_core::{AddressBook, Phone, Record};
use strum::EnumString;
use thiserror::Error;

// ─── Command ──────────────────────────────────────────────────────────────────

/// The first word of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
  Hello,
  Add,
  Change,
  Phone,
  All,
  AddBirthday,
  ShowBirthday,
  Birthdays,
  #[strum(serialize = "close", serialize = "exit")]
  Exit,
}

// ─── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CommandError {
  /// Not enough arguments; carries the usage hint.
  #[error("{0}")]
  Usage(&'static str),

  #[error("Contact {0} not found.")]
  ContactNotFound(String),

  #[error("Birthday for contact {0} not found.")]
  BirthdayNotFound(String),

  #[error(transparent)]
  Core(#[from] rolodex_core::Error),
}

pub type CommandResult = Result<String, CommandError>;

/// Split `args` into exactly `N` leading values; extra words are ignored.
fn take<'a, const N: usize>(
  args: &[&'a str],
  usage: &'static str,
) -> Result<[&'a str; N], CommandError> {
  args
    .get(..N)
    .and_then(|head| <[&str; N]>::try_from(head).ok())
    .ok_or(CommandError::Usage(usage))
}

fn require<'b>(
  book: &'b mut AddressBook,
  name: &str,
) -> Result<&'b mut Record, CommandError> {
  book
    .find_mut(name)
    .ok_or_else(|| CommandError::ContactNotFound(name.to_owned()))
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

/// `add <name> <phone>`: create the contact if needed, then add the phone.
///
/// A new contact is only inserted once its first phone validates.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult {
  let [name, phone] = take::<2>(args, "Provide both a name and a phone number.")?;

  if let Some(record) = book.find_mut(name) {
    record.add_phone(phone)?;
    return Ok("Contact updated.".into());
  }

  let mut record = Record::new(name)?;
  record.add_phone(phone)?;
  book.add_record(record);
  Ok("Contact added.".into())
}

/// `change <name> <old> <new>`
pub fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult {
  let [name, old, new] = take::<3>(
    args,
    "Provide both a name, a phone number and new phone number",
  )?;
  require(book, name)?.edit_phone(old, new)?;
  Ok(format!("Phone number for {name} changed to {new}."))
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult {
  let [name] = take::<1>(args, "Provide a name")?;
  let record = book
    .find(name)
    .ok_or_else(|| CommandError::ContactNotFound(name.to_owned()))?;
  let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
  Ok(format!("{name}: {}", phones.join(", ")))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
  if book.is_empty() {
    return "The address book is empty.".into();
  }
  book
    .records()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult {
  let [name, birthday] = take::<2>(args, "Provide a name and birthday")?;
  require(book, name)?.add_birthday(birthday)?;
  Ok(format!("Birthday {birthday} added to {name}."))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult {
  let [name] = take::<1>(args, "Provide a name")?;
  let birthday = book
    .find(name)
    .and_then(Record::birthday)
    .ok_or_else(|| CommandError::BirthdayNotFound(name.to_owned()))?;
  Ok(format!("{name}'s birthday is on {birthday}."))
}

/// `birthdays`: contacts to congratulate within the next week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
  let upcoming = book.get_upcoming_birthdays(today);
  if upcoming.is_empty() {
    return "No upcoming birthdays this week.".into();
  }
  upcoming
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("\n")
}
