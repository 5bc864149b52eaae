//! Per-category budgets.
//!
//! At most one budget exists for each `(user_id, category)` pair; the unique
//! index on those columns is the target of the upsert used by
//! [`Engine::set_budget`](crate::Engine::set_budget).

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{MoneyCents, UserId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i32,
    pub user_id: UserId,
    pub category: String,
    pub amount: MoneyCents,
}

/// Outcome of comparing the expenses of a category against its budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spent less than the budget.
    Ok,
    /// Spent exactly the budget.
    AtLimit,
    /// Spent more than the budget.
    Exceeded,
    /// No budget is set for the category.
    NoBudget,
}

impl BudgetStatus {
    /// Compares with exact integer-cent equality.
    #[must_use]
    pub fn from_amounts(spent: MoneyCents, budget: MoneyCents) -> Self {
        if spent > budget {
            Self::Exceeded
        } else if spent == budget {
            Self::AtLimit
        } else {
            Self::Ok
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::AtLimit => "at_limit",
            Self::Exceeded => "exceeded",
            Self::NoBudget => "no_budget",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub category: String,
    pub amount_minor: i64,
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

impl From<Model> for Budget {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: UserId(model.user_id),
            category: model.category,
            amount: MoneyCents::new(model.amount_minor),
        }
    }
}

impl ActiveModel {
    pub(crate) fn new_row(user_id: UserId, category: String, amount: MoneyCents) -> Self {
        Self {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.0),
            category: ActiveValue::Set(category),
            amount_minor: ActiveValue::Set(amount.cents()),
        }
    }
}
