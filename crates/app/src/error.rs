//! Errors of the command-line front end.

use config::ConfigError;
use engine::EngineError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Password hashing failed: {0}")]
    Hash(String),
    #[error("Login failed! Please check your credentials.")]
    LoginFailed,
    #[error("Password prompt: {0}")]
    Prompt(String),
    #[error("Backup error: {0}")]
    Backup(String),
}
