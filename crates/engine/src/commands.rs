//! Command structs for engine operations.
//!
//! These types group parameters for ledger writes (add/update), keeping call
//! sites readable and avoiding long argument lists.

use chrono::NaiveDate;

use crate::{MoneyCents, TransactionKind, UserId};

/// Record a new income or expense.
///
/// `date` has no default here: the caller supplies "today" from its own
/// clock when the user leaves it blank.
#[derive(Clone, Debug)]
pub struct NewTransactionCmd {
    pub user_id: UserId,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: MoneyCents,
    pub date: NaiveDate,
}

impl NewTransactionCmd {
    #[must_use]
    pub fn new(
        user_id: UserId,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: MoneyCents,
        date: NaiveDate,
    ) -> Self {
        Self {
            user_id,
            kind,
            category: category.into(),
            amount,
            date,
        }
    }

    #[must_use]
    pub fn income(
        user_id: UserId,
        category: impl Into<String>,
        amount: MoneyCents,
        date: NaiveDate,
    ) -> Self {
        Self::new(user_id, TransactionKind::Income, category, amount, date)
    }

    #[must_use]
    pub fn expense(
        user_id: UserId,
        category: impl Into<String>,
        amount: MoneyCents,
        date: NaiveDate,
    ) -> Self {
        Self::new(user_id, TransactionKind::Expense, category, amount, date)
    }
}

/// Partial update of a transaction. Fields left `None` keep their stored
/// value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub amount: Option<MoneyCents>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: MoneyCents) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns `true` if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.category.is_none() && self.amount.is_none() && self.date.is_none()
    }
}
