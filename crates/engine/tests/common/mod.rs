#![allow(dead_code)]

use chrono::NaiveDate;
use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, MoneyCents, UserId};
use migration::MigratorTrait;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

/// Engine with two registered users, `alice` and `bob`.
pub async fn engine_with_users() -> (Engine, UserId, UserId) {
    let (engine, _db) = engine_with_db().await;
    let alice = engine.register_user("alice", "hash-a").await.unwrap().id;
    let bob = engine.register_user("bob", "hash-b").await.unwrap().id;
    (engine, alice, bob)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn money(s: &str) -> MoneyCents {
    s.parse().unwrap()
}
