//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` and from `LEDGER__*` environment variables
//! (e.g. `LEDGER__APP__LEVEL=debug`, `LEDGER__DATABASE__SQLITE=ledger.db`).
//!
//! ```toml
//! [app]
//! level = "info"
//!
//! [database]
//! sqlite = "finance_manager.db"   # or: database = "memory"
//!
//! [backup]
//! dir = "backups"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(PathBuf),
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite(PathBuf::from("finance_manager.db"))
    }
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path.display()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Backup {
    pub dir: PathBuf,
}

impl Default for Backup {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("backups"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub database: Database,
    #[serde(default)]
    pub backup: Backup,
}

impl Settings {
    /// Loads `path`, or `settings.toml` from the working directory when it
    /// exists. An explicit path must exist.
    pub fn new(path: Option<&Path>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("settings").required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("LEDGER").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_file_and_fills_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[database]\nsqlite = \"/tmp/ledger-test.db\"").unwrap();

        let settings = Settings::new(Some(file.path())).unwrap();
        assert_eq!(
            settings.database,
            Database::Sqlite(PathBuf::from("/tmp/ledger-test.db"))
        );
        assert_eq!(settings.database.url(), "sqlite:/tmp/ledger-test.db?mode=rwc");
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.backup.dir, PathBuf::from("backups"));
    }

    #[test]
    fn memory_database() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "database = \"memory\"\n[app]\nlevel = \"debug\"").unwrap();

        let settings = Settings::new(Some(file.path())).unwrap();
        assert_eq!(settings.database, Database::Memory);
        assert_eq!(settings.database.url(), "sqlite::memory:");
        assert_eq!(settings.app.level, "debug");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::new(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
