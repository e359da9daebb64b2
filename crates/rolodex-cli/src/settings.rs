//! Layered configuration: optional TOML file, then `ROLODEX_*` environment
//! variables. Command-line flags are applied on top by `main`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Runtime settings for the `rolodex` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Where the SQLite address book lives.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf { PathBuf::from("addressbook.db") }

impl Settings {
  /// Read `config_path` (if it exists) and the environment.
  pub fn load(config_path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(config_path).required(false))
      .add_source(config::Environment::with_prefix("ROLODEX"))
      .build()
      .with_context(|| format!("failed to read {}", config_path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings.store_path, PathBuf::from("addressbook.db"));
  }

  #[test]
  fn file_sets_store_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rolodex.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "store_path = \"/tmp/contacts.db\"").unwrap();
    drop(file);

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.store_path, PathBuf::from("/tmp/contacts.db"));
  }

  #[test]
  fn tilde_is_expanded_only_at_the_start() {
    let plain = Path::new("data/book.db");
    assert_eq!(expand_tilde(plain), plain);

    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/book.db")),
        PathBuf::from(home).join("book.db")
      );
    }
  }
}
