//! Application state, line dispatcher and the read loop around them.

use std::io::{self, Write};

use anyhow::Context as _;
use chrono::{Local, NaiveDate};
use rolodex_core::{AddressBook, store::BookStore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{self, Command, CommandError, CommandResult};

/// Reply to an input line that is not valid UTF-8.
const NOT_UTF8: &str = "Error: input is not valid UTF-8";

/// What the event loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// Nothing to print (blank input).
  Silent,
  /// Print this and keep reading.
  Reply(String),
  /// Save the book and stop.
  Exit,
}

/// Top-level application state.
pub struct App {
  /// The in-memory book; loaded once at startup, saved once at exit.
  pub book: AddressBook,
}

impl App {
  pub fn new(book: AddressBook) -> Self { Self { book } }

  /// Handle one input line, relative to today's local date.
  pub fn handle_line(&mut self, line: &str) -> Outcome {
    self.handle_line_on(line, Local::now().date_naive())
  }

  /// Handle one input line, with `today` as the reference date for
  /// `birthdays`.
  pub fn handle_line_on(&mut self, line: &str, today: NaiveDate) -> Outcome {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
      return Outcome::Silent;
    };
    let args: Vec<&str> = words.collect();

    let Ok(command) = word.parse::<Command>() else {
      tracing::debug!(word, "unknown command");
      return Outcome::Reply("Invalid command.".into());
    };
    tracing::debug!(?command, args = args.len(), "dispatching");

    let result: CommandResult = match command {
      Command::Exit => return Outcome::Exit,
      Command::Hello => Ok("How can I help you?".into()),
      Command::Add => commands::add_contact(&args, &mut self.book),
      Command::Change => commands::change_phone(&args, &mut self.book),
      Command::Phone => commands::show_phone(&args, &self.book),
      Command::All => Ok(commands::show_all(&self.book)),
      Command::AddBirthday => commands::add_birthday(&args, &mut self.book),
      Command::ShowBirthday => commands::show_birthday(&args, &self.book),
      Command::Birthdays => Ok(commands::birthdays(&self.book, today)),
    };

    Outcome::Reply(result.unwrap_or_else(|e| render_error(&e)))
  }

  /// Serve commands from `input` until `exit`/`close` or end of input.
  ///
  /// A line that is not valid UTF-8 is answered with an error and skipped.
  /// Only a failing reader or writer ends the loop early.
  pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> io::Result<()>
  where
    R: AsyncBufRead + Unpin,
    W: Write,
  {
    writeln!(out, "Welcome to the assistant bot!")?;
    let mut buf = Vec::new();

    loop {
      write!(out, "Enter a command: ")?;
      out.flush()?;

      buf.clear();
      if input.read_until(b'\n', &mut buf).await? == 0 {
        // Ctrl-D
        writeln!(out)?;
        return Ok(());
      }

      let outcome = match std::str::from_utf8(&buf) {
        Ok(line) => self.handle_line(line),
        Err(e) => {
          tracing::warn!(error = %e, "skipping input line");
          Outcome::Reply(NOT_UTF8.into())
        }
      };

      match outcome {
        Outcome::Silent => {}
        Outcome::Reply(text) => writeln!(out, "{text}")?,
        Outcome::Exit => return Ok(()),
      }
    }
  }
}

/// Load the book from `store`, serve `input`, then save.
///
/// The book is saved even when reading `input` fails; that error is reported
/// after the save.
pub async fn run_session<S, R, W>(
  store: &S,
  input: R,
  out: &mut W,
) -> anyhow::Result<()>
where
  S: BookStore,
  R: AsyncBufRead + Unpin,
  W: Write,
{
  let book = store.load().await.context("failed to load address book")?;
  tracing::info!(contacts = book.len(), "address book loaded");

  let mut app = App::new(book);
  let served = app.run(input, out).await;

  store
    .save(&app.book)
    .await
    .context("failed to save address book")?;
  tracing::info!(contacts = app.book.len(), "address book saved");

  served.context("reading commands")?;
  writeln!(out, "Good bye!")?;
  Ok(())
}

/// Render a failed command as the single line shown to the user.
fn render_error(err: &CommandError) -> String {
  match err {
    CommandError::Core(core) => {
      tracing::debug!(kind = ?core.kind(), "command rejected");
      format!("Error: {core}")
    }
    other => format!("Error: {other}"),
  }
}
