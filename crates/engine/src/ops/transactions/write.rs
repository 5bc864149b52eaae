use sea_orm::{ActiveValue, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{
    BudgetStatus, NewTransactionCmd, ResultEngine, Transaction, TransactionId, TransactionKind,
    TransactionPatch, UserId, transactions,
    util::{ensure_amount, normalize_required_text},
};

use super::super::{Engine, with_tx};

/// A committed ledger write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posted {
    pub transaction: Transaction,
    /// Status of the transaction's category after the write. `None` for
    /// income, and for an expense whose evaluation failed after commit (the
    /// failure is logged at error level).
    pub budget_status: Option<BudgetStatus>,
}

impl Engine {
    /// Records a new income or expense.
    ///
    /// For expenses the category is evaluated against its budget once the
    /// row is committed.
    pub async fn add_transaction(&self, cmd: NewTransactionCmd) -> ResultEngine<Posted> {
        let category = normalize_required_text(&cmd.category, "category")?;
        ensure_amount(cmd.amount, "amount")?;

        let model = with_tx!(self, |db_tx| {
            self.require_user(&db_tx, cmd.user_id).await?;
            Ok(transactions::ActiveModel::new_row(
                cmd.user_id,
                cmd.kind,
                category,
                cmd.amount,
                cmd.date,
            )
            .insert(&db_tx)
            .await?)
        })?;

        let transaction = Transaction::try_from(model)?;
        debug!(
            user_id = %transaction.user_id,
            transaction_id = %transaction.id,
            "added {} of {} in {}",
            transaction.kind,
            transaction.amount,
            transaction.category
        );
        Ok(self.posted(transaction).await)
    }

    /// Updates the patched fields of a transaction owned by `user_id`.
    ///
    /// An empty patch leaves the row untouched.
    pub async fn update_transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
        patch: TransactionPatch,
    ) -> ResultEngine<Posted> {
        let category = patch
            .category
            .as_deref()
            .map(|c| normalize_required_text(c, "category"))
            .transpose()?;
        if let Some(amount) = patch.amount {
            ensure_amount(amount, "amount")?;
        }

        let model = with_tx!(self, |db_tx| {
            let current = self
                .require_owned_transaction(&db_tx, user_id, transaction_id)
                .await?;
            if patch.is_empty() {
                Ok(current)
            } else {
                let mut active: transactions::ActiveModel = current.into();
                if let Some(kind) = patch.kind {
                    active.kind = ActiveValue::Set(kind.as_str().to_string());
                }
                if let Some(category) = category {
                    active.category = ActiveValue::Set(category);
                }
                if let Some(amount) = patch.amount {
                    active.amount_minor = ActiveValue::Set(amount.cents());
                }
                if let Some(date) = patch.date {
                    active.date = ActiveValue::Set(date);
                }
                Ok(active.update(&db_tx).await?)
            }
        })?;

        let transaction = Transaction::try_from(model)?;
        debug!(
            user_id = %user_id,
            transaction_id = %transaction_id,
            "updated transaction"
        );
        Ok(self.posted(transaction).await)
    }

    /// Deletes a transaction owned by `user_id`. Budgets are left untouched.
    pub async fn delete_transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_owned_transaction(&db_tx, user_id, transaction_id)
                .await?;
            transactions::Entity::delete_by_id(transaction_id.raw())
                .exec(&db_tx)
                .await?;
            Ok(())
        })?;

        debug!(
            user_id = %user_id,
            transaction_id = %transaction_id,
            "deleted transaction"
        );
        Ok(())
    }

    /// Attaches the budget evaluation of an expense's category.
    ///
    /// The write is already committed here, so a failed evaluation is logged
    /// and reported as `None` instead of failing the call.
    async fn posted(&self, transaction: Transaction) -> Posted {
        let budget_status = match transaction.kind {
            TransactionKind::Income => None,
            TransactionKind::Expense => {
                match self
                    .evaluate_category(transaction.user_id, &transaction.category)
                    .await
                {
                    Ok(status) => Some(status),
                    Err(err) => {
                        error!(
                            user_id = %transaction.user_id,
                            transaction_id = %transaction.id,
                            "budget evaluation failed for '{}': {err}",
                            transaction.category
                        );
                        None
                    }
                }
            }
        };
        Posted {
            transaction,
            budget_status,
        }
    }
}
