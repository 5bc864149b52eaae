//! Backup and restore of the SQLite file.
//!
//! The database is copied as an opaque file, so these functions must only run
//! while no engine has the file open.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::AppError;

const BACKUP_PREFIX: &str = "backup_";
const BACKUP_EXT: &str = "db";

/// Copies `database` to `dir/backup_<YYYYmmddHHMMSS>.db`.
pub fn create(database: &Path, dir: &Path, now: NaiveDateTime) -> Result<PathBuf, AppError> {
    if !database.is_file() {
        return Err(AppError::Backup(format!(
            "database file not found: {}",
            database.display()
        )));
    }
    fs::create_dir_all(dir)?;

    let target = dir.join(format!(
        "{BACKUP_PREFIX}{}.{BACKUP_EXT}",
        now.format("%Y%m%d%H%M%S")
    ));
    fs::copy(database, &target)?;
    info!("backup created at {}", target.display());
    Ok(target)
}

/// Names of the available backups, oldest first.
pub fn list(dir: &Path) -> Result<Vec<String>, AppError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == BACKUP_EXT))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    Ok(names)
}

/// Overwrites `database` with the backup called `name` from `dir`.
///
/// Only names returned by [`list`] are accepted.
pub fn restore(dir: &Path, name: &str, database: &Path) -> Result<PathBuf, AppError> {
    if !list(dir)?.iter().any(|candidate| candidate == name) {
        return Err(AppError::Backup(format!("no such backup: {name}")));
    }
    let source = dir.join(name);
    fs::copy(&source, database)?;
    info!("data restored from {}", source.display());
    Ok(source)
}
