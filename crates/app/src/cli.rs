use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use engine::{EngineError, MoneyCents, Period, TransactionKind};

#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "Personal finance ledger: transactions, budgets and reports")]
pub struct Cli {
    /// Settings file (defaults to `settings.toml` when present).
    #[arg(long, short, env = "LEDGER_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Password of the user; prompted when missing.
    #[arg(long, env = "LEDGER_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage users.
    User(User),
    /// Record and inspect transactions.
    Tx(Tx),
    /// Manage per-category budgets.
    Budget(Budget),
    /// Monthly or yearly income/expense summary.
    Report(ReportArgs),
    /// Copy or restore the database file.
    Backup(Backup),
}

#[derive(Args, Debug)]
pub struct Login {
    /// Username to act as.
    #[arg(long, short)]
    pub user: String,
}

#[derive(Args, Debug)]
pub struct User {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    Register(UserRegisterArgs),
}

#[derive(Args, Debug)]
pub struct UserRegisterArgs {
    #[arg(long)]
    pub username: String,
}

#[derive(Args, Debug)]
pub struct Tx {
    #[command(flatten)]
    pub login: Login,

    #[command(subcommand)]
    pub command: TxCommand,
}

#[derive(Subcommand, Debug)]
pub enum TxCommand {
    Add(TxAddArgs),
    List,
    Update(TxUpdateArgs),
    Delete(TxDeleteArgs),
}

#[derive(Args, Debug)]
pub struct TxAddArgs {
    /// `income` or `expense`.
    #[arg(long, value_parser = parse_kind)]
    pub kind: TransactionKind,
    #[arg(long)]
    pub category: String,
    #[arg(long, value_parser = parse_money)]
    pub amount: MoneyCents,
    /// `YYYY-MM-DD`; today when omitted.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct TxUpdateArgs {
    #[arg(long)]
    pub id: i32,
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<TransactionKind>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, value_parser = parse_money)]
    pub amount: Option<MoneyCents>,
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct TxDeleteArgs {
    #[arg(long)]
    pub id: i32,
}

#[derive(Args, Debug)]
pub struct Budget {
    #[command(flatten)]
    pub login: Login,

    #[command(subcommand)]
    pub command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    Set(BudgetSetArgs),
    List,
    Status(BudgetStatusArgs),
}

#[derive(Args, Debug)]
pub struct BudgetSetArgs {
    #[arg(long)]
    pub category: String,
    #[arg(long, value_parser = parse_money)]
    pub amount: MoneyCents,
}

#[derive(Args, Debug)]
pub struct BudgetStatusArgs {
    /// Single category; every budget when omitted.
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub login: Login,

    #[arg(long, value_parser = parse_period, default_value = "monthly")]
    pub period: Period,
    /// Reference date; today when omitted.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct Backup {
    #[command(subcommand)]
    pub command: BackupCommand,
}

#[derive(Subcommand, Debug)]
pub enum BackupCommand {
    Create,
    List,
    Restore(BackupRestoreArgs),
}

#[derive(Args, Debug)]
pub struct BackupRestoreArgs {
    /// File name as shown by `backup list`.
    #[arg(long)]
    pub name: String,
}

fn parse_kind(raw: &str) -> Result<TransactionKind, String> {
    raw.parse().map_err(|e: EngineError| e.to_string())
}

fn parse_money(raw: &str) -> Result<MoneyCents, String> {
    raw.parse().map_err(|e: EngineError| e.to_string())
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    engine::parse_date(raw).map_err(|e| e.to_string())
}

fn parse_period(raw: &str) -> Result<Period, String> {
    raw.parse().map_err(|e: EngineError| e.to_string())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_typed_values() {
        let cli = Cli::try_parse_from([
            "ledger", "tx", "--user", "alice", "add", "--kind", "Expense", "--category", "Food",
            "--amount", "12,50",
        ])
        .unwrap();
        let Command::Tx(tx) = cli.command else {
            panic!("expected tx command");
        };
        assert_eq!(tx.login.user, "alice");
        let TxCommand::Add(args) = tx.command else {
            panic!("expected add");
        };
        assert_eq!(args.kind, TransactionKind::Expense);
        assert_eq!(args.amount, MoneyCents::new(1250));
        assert_eq!(args.date, None);
    }

    #[test]
    fn rejects_invalid_values() {
        for argv in [
            vec!["ledger", "tx", "--user", "a", "add", "--kind", "gift", "--category", "x", "--amount", "1"],
            vec!["ledger", "tx", "--user", "a", "add", "--kind", "income", "--category", "x", "--amount", "1.234"],
            vec!["ledger", "tx", "--user", "a", "add", "--kind", "income", "--category", "x", "--amount", "1", "--date", "2024-02-30"],
            vec!["ledger", "report", "--user", "a", "--period", "weekly"],
        ] {
            assert!(Cli::try_parse_from(argv).is_err());
        }
    }
}
