//! Ownership checks shared by the write and read paths.
//!
//! A row that exists but belongs to another user is reported exactly like a
//! missing row, so ids of other users never leak.

use sea_orm::{ConnectionTrait, QueryFilter, prelude::*};

use crate::{EngineError, ResultEngine, TransactionId, UserId, transactions, users};

use super::Engine;

impl Engine {
    pub(super) async fn require_user<C>(&self, db: &C, user_id: UserId) -> ResultEngine<users::Model>
    where
        C: ConnectionTrait,
    {
        users::Entity::find_by_id(user_id.raw())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("user not exists".to_string()))
    }

    pub(super) async fn require_owned_transaction<C>(
        &self,
        db: &C,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> ResultEngine<transactions::Model>
    where
        C: ConnectionTrait,
    {
        transactions::Entity::find_by_id(transaction_id.raw())
            .filter(transactions::Column::UserId.eq(user_id.raw()))
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("transaction not exists".to_string()))
    }
}
