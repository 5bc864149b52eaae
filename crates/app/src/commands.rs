//! Command handlers: resolve the user, call the engine, print the result.

use std::path::Path;

use chrono::{Local, NaiveDate};
use engine::{
    BudgetStatus, Engine, NewTransactionCmd, Posted, Transaction, TransactionId, TransactionPatch,
    User,
};
use tracing::info;

use crate::{
    auth, backup,
    cli::{BackupCommand, BudgetCommand, Login, ReportArgs, TxCommand, UserRegisterArgs},
    error::AppError,
    prompt,
    settings::{Database, Settings},
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn database_file(settings: &Settings) -> Result<&Path, AppError> {
    match &settings.database {
        Database::Sqlite(path) => Ok(path.as_path()),
        Database::Memory => Err(AppError::Backup(
            "backups need a sqlite database file".to_string(),
        )),
    }
}

pub fn backup(settings: &Settings, command: BackupCommand) -> Result<(), AppError> {
    let database = database_file(settings)?;
    let dir = settings.backup.dir.as_path();
    match command {
        BackupCommand::Create => {
            let path = backup::create(database, dir, Local::now().naive_local())?;
            println!("Backup created: {}", path.display());
        }
        BackupCommand::List => {
            let names = backup::list(dir)?;
            if names.is_empty() {
                println!("No backups found.");
            }
            for name in names {
                println!("{name}");
            }
        }
        BackupCommand::Restore(args) => {
            let path = backup::restore(dir, &args.name, database)?;
            println!("Database restored from {}", path.display());
        }
    }
    Ok(())
}

pub async fn register(
    engine: &Engine,
    args: UserRegisterArgs,
    password: Option<String>,
) -> Result<(), AppError> {
    let password = match password {
        Some(password) => password,
        None => prompt::prompt_password_twice()?,
    };
    let hash = auth::hash_password(&password)?;
    let user = engine.register_user(&args.username, &hash).await?;
    info!(user_id = %user.id, "registered {}", user.username);
    println!("Registration successful! ({})", user.username);
    Ok(())
}

pub async fn login(
    engine: &Engine,
    login: &Login,
    password: Option<String>,
) -> Result<User, AppError> {
    let password = match password {
        Some(password) => password,
        None => prompt::prompt_password("Password: ")?,
    };
    auth::login(engine, &login.user, &password).await
}

fn print_posted(verb: &str, posted: &Posted) {
    let tx = &posted.transaction;
    println!(
        "{verb} transaction {}: {} {} in '{}' on {}",
        tx.id, tx.kind, tx.amount, tx.category, tx.date
    );
    if let Some(alert) = budget_alert(posted.budget_status, &tx.category) {
        println!("{alert}");
    }
}

fn budget_alert(status: Option<BudgetStatus>, category: &str) -> Option<String> {
    match status? {
        BudgetStatus::Exceeded => Some(format!(
            "Alert: You have exceeded your budget for '{category}'."
        )),
        BudgetStatus::AtLimit => Some(format!(
            "Notice: You have reached your budget limit for '{category}'."
        )),
        BudgetStatus::Ok | BudgetStatus::NoBudget => None,
    }
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions found.");
        return;
    }
    println!(
        "{:>5}  {:<8}  {:<20}  {:>12}  {:<10}",
        "ID", "Type", "Category", "Amount", "Date"
    );
    for tx in transactions {
        println!(
            "{:>5}  {:<8}  {:<20}  {:>12}  {:<10}",
            tx.id.to_string(),
            tx.kind,
            tx.category,
            tx.amount.to_string(),
            tx.date.to_string()
        );
    }
}

pub async fn tx(engine: &Engine, user: &User, command: TxCommand) -> Result<(), AppError> {
    match command {
        TxCommand::Add(args) => {
            let cmd = NewTransactionCmd::new(
                user.id,
                args.kind,
                args.category,
                args.amount,
                args.date.unwrap_or_else(today),
            );
            let posted = engine.add_transaction(cmd).await?;
            print_posted("Added", &posted);
        }
        TxCommand::List => {
            print_transactions(&engine.list_transactions(user.id).await?);
        }
        TxCommand::Update(args) => {
            let id = TransactionId::new(args.id);
            let mut patch = TransactionPatch::new();
            if let Some(kind) = args.kind {
                patch = patch.kind(kind);
            }
            if let Some(category) = args.category {
                patch = patch.category(category);
            }
            if let Some(amount) = args.amount {
                patch = patch.amount(amount);
            }
            if let Some(date) = args.date {
                patch = patch.date(date);
            }
            let before = engine.transaction(user.id, id).await?;
            print_transactions(std::slice::from_ref(&before));
            let posted = engine.update_transaction(user.id, id, patch).await?;
            print_posted("Updated", &posted);
        }
        TxCommand::Delete(args) => {
            let id = TransactionId::new(args.id);
            let before = engine.transaction(user.id, id).await?;
            engine.delete_transaction(user.id, id).await?;
            println!(
                "Deleted transaction {}: {} {} in '{}'",
                before.id, before.kind, before.amount, before.category
            );
        }
    }
    Ok(())
}

pub async fn budget(engine: &Engine, user: &User, command: BudgetCommand) -> Result<(), AppError> {
    match command {
        BudgetCommand::Set(args) => {
            let budget = engine
                .set_budget(user.id, &args.category, args.amount)
                .await?;
            println!(
                "Budget for '{}' set to {}.",
                budget.category, budget.amount
            );
        }
        BudgetCommand::List => {
            let budgets = engine.list_budgets(user.id).await?;
            if budgets.is_empty() {
                println!("No budgets set.");
            }
            for budget in budgets {
                println!("{:<20}  {:>12}", budget.category, budget.amount.to_string());
            }
        }
        BudgetCommand::Status(args) => match args.category {
            Some(category) => {
                let status = engine.evaluate_category(user.id, &category).await?;
                println!("{}: {}", category.trim(), status.as_str());
                if let Some(alert) = budget_alert(Some(status), category.trim()) {
                    println!("{alert}");
                }
            }
            None => {
                let lines = engine.budget_overview(user.id).await?;
                if lines.is_empty() {
                    println!("No budgets set.");
                    return Ok(());
                }
                println!(
                    "{:<20}  {:>12}  {:>12}  {:>12}  {:<10}",
                    "Category", "Budget", "Spent", "Remaining", "Status"
                );
                for line in lines {
                    println!(
                        "{:<20}  {:>12}  {:>12}  {:>12}  {:<10}",
                        line.category,
                        line.budget.to_string(),
                        line.spent.to_string(),
                        line.remaining.to_string(),
                        line.status.as_str()
                    );
                }
            }
        },
    }
    Ok(())
}

pub async fn report(engine: &Engine, user: &User, args: ReportArgs) -> Result<(), AppError> {
    let report = engine
        .generate_report(user.id, args.period, args.date.unwrap_or_else(today))
        .await?;
    println!("Report for {} ({})", report.period_key, report.period.as_str());
    println!("Total income:  {:>12}", report.total_income.to_string());
    println!("Total expense: {:>12}", report.total_expense.to_string());
    println!("Savings:       {:>12}", report.savings.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_only_at_or_over_the_limit() {
        assert_eq!(
            budget_alert(Some(BudgetStatus::Exceeded), "Food").as_deref(),
            Some("Alert: You have exceeded your budget for 'Food'.")
        );
        assert_eq!(
            budget_alert(Some(BudgetStatus::AtLimit), "Food").as_deref(),
            Some("Notice: You have reached your budget limit for 'Food'.")
        );
        assert_eq!(budget_alert(Some(BudgetStatus::Ok), "Food"), None);
        assert_eq!(budget_alert(Some(BudgetStatus::NoBudget), "Food"), None);
        assert_eq!(budget_alert(None, "Food"), None);
    }

    #[test]
    fn memory_database_cannot_be_backed_up() {
        let settings = Settings {
            database: Database::Memory,
            ..Settings::default()
        };
        assert!(matches!(
            backup(&settings, BackupCommand::List),
            Err(AppError::Backup(_))
        ));
    }
}
