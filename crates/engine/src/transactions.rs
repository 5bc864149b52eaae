//! Transaction primitives.
//!
//! A `Transaction` is a single income or expense owned by one user. Amounts
//! are always positive; the kind carries the direction.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, UserId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidInput(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = EngineError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.trim().to_lowercase().as_str())
    }
}

/// Surrogate id of a stored transaction. Ids grow with insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub(crate) i32);

impl TransactionId {
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: MoneyCents,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub category: String,
    pub amount_minor: i64,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TransactionId(model.id),
            user_id: UserId(model.user_id),
            kind: TransactionKind::try_from(model.kind.as_str())?,
            category: model.category,
            amount: MoneyCents::new(model.amount_minor),
            date: model.date,
        })
    }
}

impl ActiveModel {
    /// Row for a transaction that has not been stored yet (id assigned by the
    /// database).
    pub(crate) fn new_row(
        user_id: UserId,
        kind: TransactionKind,
        category: String,
        amount: MoneyCents,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.0),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            category: ActiveValue::Set(category),
            amount_minor: ActiveValue::Set(amount.cents()),
            date: ActiveValue::Set(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_known_values_only() {
        assert_eq!(
            "income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            " Expense ".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            "transfer".parse::<TransactionKind>(),
            Err(EngineError::InvalidInput(
                "invalid transaction kind: transfer".to_string()
            ))
        );
        assert!("".parse::<TransactionKind>().is_err());
    }
}
