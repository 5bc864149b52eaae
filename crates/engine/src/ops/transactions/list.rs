use chrono::NaiveDate;
use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{
    MoneyCents, ResultEngine, Transaction, TransactionId, TransactionKind, UserId, transactions,
};

use super::super::Engine;

impl Engine {
    /// Lists the transactions of `user_id`, newest date first.
    ///
    /// Transactions sharing a date keep their insertion order.
    pub async fn list_transactions(&self, user_id: UserId) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.raw()))
            .order_by_desc(transactions::Column::Date)
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    /// Returns one transaction owned by `user_id`.
    pub async fn transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> ResultEngine<Transaction> {
        let model = self
            .require_owned_transaction(&self.database, user_id, transaction_id)
            .await?;
        Transaction::try_from(model)
    }

    /// Sum of all expenses of `user_id` in `category` (zero when none).
    pub async fn category_spent(
        &self,
        user_id: UserId,
        category: &str,
    ) -> ResultEngine<MoneyCents> {
        let models = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.raw()))
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .filter(transactions::Column::Category.eq(category.trim()))
            .all(&self.database)
            .await?;
        MoneyCents::total(models.into_iter().map(|m| MoneyCents::new(m.amount_minor)))
    }

    /// Transactions of `user_id` dated within `[from, to)`.
    pub(in crate::ops) async fn transactions_between(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.raw()))
            .filter(transactions::Column::Date.gte(from))
            .filter(transactions::Column::Date.lt(to))
            .order_by_asc(transactions::Column::Date)
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    /// All expenses of `user_id`, oldest first.
    pub(in crate::ops) async fn expenses(&self, user_id: UserId) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.raw()))
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }
}
