//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidInput`] thrown when a kind, category, amount, date or period is
//!   malformed. Nothing is written.
//! - [`NotFound`] thrown when an item does not exist or is not owned by the
//!   caller. The two cases are indistinguishable on purpose.
//! - [`ConstraintViolation`] thrown when a write would break a uniqueness
//!   index (duplicate username, duplicate budget on the strict insert path).
//!
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`NotFound`]: EngineError::NotFound
//!  [`ConstraintViolation`]: EngineError::ConstraintViolation
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("\"{0}\" not found!")]
    NotFound(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for EngineError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::ConstraintViolation(detail),
            _ => Self::Database(err),
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::ConstraintViolation(a), Self::ConstraintViolation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
