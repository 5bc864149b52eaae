//! Ledger and budget consistency engine.
//!
//! The [`Engine`] owns an explicit database handle and exposes three groups of
//! operations, all scoped to an authenticated [`UserId`]:
//!
//! - ledger: add/update/delete/list transactions
//! - budgets: set/list budgets and evaluate a category against its budget
//! - reports: monthly/yearly income, expense and savings totals
//!
//! Every write runs inside a single database transaction. Expense writes are
//! followed by a budget evaluation of the affected category, returned to the
//! caller in [`Posted`].

pub use budgets::{Budget, BudgetStatus};
pub use commands::{NewTransactionCmd, TransactionPatch};
pub use error::EngineError;
pub use money::MoneyCents;
pub use ops::{BudgetLine, Engine, EngineBuilder, Posted};
pub use reports::{Period, PeriodKey, Report};
pub use transactions::{Transaction, TransactionId, TransactionKind};
pub use users::{User, UserId};
pub use util::parse_date;

mod budgets;
mod commands;
mod error;
mod money;
mod ops;
mod reports;
mod transactions;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
