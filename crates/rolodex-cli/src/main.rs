//! `rolodex`: an interactive address-book assistant.
//!
//! # Usage
//!
//! ```
//! rolodex
//! rolodex --store ~/contacts.db
//! rolodex --config ~/.config/rolodex/rolodex.toml
//! ```
//!
//! Type `hello`, `add <name> <phone>`, `change <name> <old> <new>`,
//! `phone <name>`, `all`, `add-birthday <name> <DD.MM.YYYY>`,
//! `show-birthday <name>`, `birthdays`, or `exit`/`close`.

mod app;
mod commands;
mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rolodex_store_sqlite::SqliteStore;
use settings::{Settings, expand_tilde};
use tokio::io::BufReader;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Interactive address book")]
struct Args {
  /// Path to a TOML config file (store_path).
  #[arg(short, long, value_name = "FILE", default_value = "rolodex.toml")]
  config: PathBuf,

  /// Path to the SQLite address book; overrides the config file and
  /// `ROLODEX_STORE_PATH`.
  #[arg(long, value_name = "PATH")]
  store: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Logs go to stderr; stdout carries replies only.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Flags override the environment, which overrides the config file.
  let settings = Settings::load(&args.config)?;
  let store_path = expand_tilde(&args.store.unwrap_or(settings.store_path));

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = %store_path.display(), "store opened");

  let input = BufReader::new(tokio::io::stdin());
  app::run_session(&store, input, &mut io::stdout()).await
}
