use std::collections::HashMap;

use sea_orm::{
    ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::OnConflict,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Budget, BudgetStatus, EngineError, MoneyCents, ResultEngine, UserId, budgets,
    util::{ensure_amount, normalize_required_text},
};

use super::{Engine, with_tx};

/// One row of the budget overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String,
    pub budget: MoneyCents,
    pub spent: MoneyCents,
    /// `budget - spent`; negative once the budget is exceeded.
    pub remaining: MoneyCents,
    pub status: BudgetStatus,
}

impl Engine {
    /// Sets the budget of a category, replacing the amount of an existing
    /// budget for the same `(user_id, category)`.
    pub async fn set_budget(
        &self,
        user_id: UserId,
        category: &str,
        amount: MoneyCents,
    ) -> ResultEngine<Budget> {
        let category = normalize_required_text(category, "category")?;
        ensure_amount(amount, "budget amount")?;

        let model = with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            budgets::Entity::insert(budgets::ActiveModel::new_row(
                user_id,
                category.clone(),
                amount,
            ))
            .on_conflict(
                OnConflict::columns([budgets::Column::UserId, budgets::Column::Category])
                    .update_column(budgets::Column::AmountMinor)
                    .to_owned(),
            )
            .exec_without_returning(&db_tx)
            .await?;

            self.find_budget(&db_tx, user_id, &category)
                .await?
                .ok_or_else(|| EngineError::NotFound(format!("budget for {category}")))
        })?;

        info!(
            user_id = %user_id,
            "budget for '{}' set to {}",
            model.category,
            MoneyCents::new(model.amount_minor)
        );
        Ok(Budget::from(model))
    }

    /// Inserts a budget without overwriting: fails with `ConstraintViolation`
    /// when the category already has one.
    pub async fn create_budget(
        &self,
        user_id: UserId,
        category: &str,
        amount: MoneyCents,
    ) -> ResultEngine<Budget> {
        let category = normalize_required_text(category, "category")?;
        ensure_amount(amount, "budget amount")?;

        let model = with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            if self.find_budget(&db_tx, user_id, &category).await?.is_some() {
                return Err(EngineError::ConstraintViolation(format!(
                    "budget already exists for category: {category}"
                )));
            }
            Ok(budgets::ActiveModel::new_row(user_id, category.clone(), amount)
                .insert(&db_tx)
                .await?)
        })?;

        debug!(user_id = %user_id, "created budget for '{}'", model.category);
        Ok(Budget::from(model))
    }

    /// Lists the budgets of `user_id` in storage order.
    pub async fn list_budgets(&self, user_id: UserId) -> ResultEngine<Vec<Budget>> {
        Ok(budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id.raw()))
            .order_by_asc(budgets::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Budget::from)
            .collect())
    }

    /// Returns the budget of a category, if any.
    pub async fn budget(&self, user_id: UserId, category: &str) -> ResultEngine<Option<Budget>> {
        Ok(self
            .find_budget(&self.database, user_id, category.trim())
            .await?
            .map(Budget::from))
    }

    /// Compares the expenses of a category with its budget.
    ///
    /// Read-only: the status is returned for the caller to surface.
    pub async fn evaluate_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> ResultEngine<BudgetStatus> {
        let Some(budget) = self.budget(user_id, category).await? else {
            return Ok(BudgetStatus::NoBudget);
        };
        let spent = self.category_spent(user_id, &budget.category).await?;
        Ok(BudgetStatus::from_amounts(spent, budget.amount))
    }

    /// Spent, remaining and status of every budget of `user_id`.
    pub async fn budget_overview(&self, user_id: UserId) -> ResultEngine<Vec<BudgetLine>> {
        let budgets = self.list_budgets(user_id).await?;

        let mut spent_by_category: HashMap<String, MoneyCents> = HashMap::new();
        for expense in self.expenses(user_id).await? {
            let spent = spent_by_category.entry(expense.category).or_default();
            *spent = spent.checked_add(expense.amount)?;
        }

        budgets
            .into_iter()
            .map(|budget| -> ResultEngine<BudgetLine> {
                let spent = spent_by_category
                    .get(&budget.category)
                    .copied()
                    .unwrap_or_default();
                Ok(BudgetLine {
                    status: BudgetStatus::from_amounts(spent, budget.amount),
                    remaining: budget.amount.checked_sub(spent)?,
                    spent,
                    budget: budget.amount,
                    category: budget.category,
                })
            })
            .collect()
    }

    async fn find_budget<C>(
        &self,
        db: &C,
        user_id: UserId,
        category: &str,
    ) -> ResultEngine<Option<budgets::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id.raw()))
            .filter(budgets::Column::Category.eq(category))
            .one(db)
            .await?)
    }
}
