//! Applies or inspects the ledger schema outside the `ledger` binary.
//!
//! The database comes from `LEDGER_DATABASE_URL`, falling back to the file
//! the `ledger` binary uses by default.

use std::str::FromStr;

use sea_orm::Database;
use sea_orm_migration::prelude::*;

const DEFAULT_URL: &str = "sqlite:./finance_manager.db?mode=rwc";

enum Action {
    Up,
    Down,
    Fresh,
    Status,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "fresh" => Ok(Self::Fresh),
            "status" => Ok(Self::Status),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let action = match std::env::args().nth(1).as_deref().unwrap_or("up").parse() {
        Ok(action) => action,
        Err(err) => {
            eprintln!("{err}\nUsage: migration [up|down|fresh|status]");
            std::process::exit(2);
        }
    };

    let url = std::env::var("LEDGER_DATABASE_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    let db = Database::connect(&url).await?;

    match action {
        Action::Up => migration::Migrator::up(&db, None).await?,
        Action::Down => migration::Migrator::down(&db, None).await?,
        Action::Fresh => migration::Migrator::fresh(&db).await?,
        Action::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}
