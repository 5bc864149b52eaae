use clap::Parser;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use cli::{Cli, Command};
use settings::Settings;

mod auth;
mod backup;
mod cli;
mod commands;
mod error;
mod prompt;
mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.settings.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ledger={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, &settings).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli, settings: &Settings) -> Result<(), error::AppError> {
    let password = cli.password;

    match cli.command {
        // Backups copy the raw file, so no connection is opened on it.
        Command::Backup(backup) => commands::backup(settings, backup.command)?,
        Command::User(user) => {
            let engine = open_engine(&settings.database).await?;
            match user.command {
                cli::UserCommand::Register(args) => {
                    commands::register(&engine, args, password).await?;
                }
            }
        }
        Command::Tx(tx) => {
            let engine = open_engine(&settings.database).await?;
            let user = commands::login(&engine, &tx.login, password).await?;
            commands::tx(&engine, &user, tx.command).await?;
        }
        Command::Budget(budget) => {
            let engine = open_engine(&settings.database).await?;
            let user = commands::login(&engine, &budget.login, password).await?;
            commands::budget(&engine, &user, budget.command).await?;
        }
        Command::Report(args) => {
            let engine = open_engine(&settings.database).await?;
            let user = commands::login(&engine, &args.login, password).await?;
            commands::report(&engine, &user, args).await?;
        }
    }

    Ok(())
}

async fn open_engine(config: &settings::Database) -> Result<engine::Engine, error::AppError> {
    let db = connect_db(config).await?;
    Ok(engine::Engine::builder().database(db).build().await?)
}

async fn connect_db(config: &settings::Database) -> Result<DatabaseConnection, error::AppError> {
    let database = sea_orm::Database::connect(config.url()).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
