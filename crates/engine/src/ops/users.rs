use sea_orm::{QueryFilter, TransactionTrait, prelude::*};
use tracing::info;

use crate::{
    EngineError, ResultEngine, User, UserId, users,
    util::normalize_required_text,
};

use super::{Engine, with_tx};

impl Engine {
    /// Registers a user with an already hashed credential.
    ///
    /// Fails with `ConstraintViolation` when the username is taken.
    pub async fn register_user(&self, username: &str, password_hash: &str) -> ResultEngine<User> {
        let username = normalize_required_text(username, "username")?;
        if password_hash.is_empty() {
            return Err(EngineError::InvalidInput(
                "password hash must not be empty".to_string(),
            ));
        }

        let model = with_tx!(self, |db_tx| {
            let existing = users::Entity::find()
                .filter(users::Column::Username.eq(username.as_str()))
                .one(&db_tx)
                .await?;
            if existing.is_some() {
                return Err(EngineError::ConstraintViolation(format!(
                    "username already exists: {username}"
                )));
            }
            Ok(users::ActiveModel::new_user(username.clone(), password_hash.to_string())
                .insert(&db_tx)
                .await?)
        })?;

        info!(user_id = model.id, "registered user {}", model.username);
        Ok(User::from(model))
    }

    /// Looks a user up by id.
    pub async fn user(&self, user_id: UserId) -> ResultEngine<User> {
        self.require_user(&self.database, user_id)
            .await
            .map(User::from)
    }

    /// Looks a user up by username. Returns `None` when nobody has it.
    pub async fn user_by_username(&self, username: &str) -> ResultEngine<Option<User>> {
        Ok(users::Entity::find()
            .filter(users::Column::Username.eq(username.trim()))
            .one(&self.database)
            .await?
            .map(User::from))
    }
}
