use chrono::NaiveDate;
use tracing::debug;

use crate::{MoneyCents, Period, PeriodKey, Report, ResultEngine, TransactionKind, UserId};

use super::Engine;

impl Engine {
    /// Sums income and expenses of `user_id` over the period containing
    /// `reference`.
    ///
    /// `reference` is supplied by the caller (usually today's date).
    pub async fn generate_report(
        &self,
        user_id: UserId,
        period: Period,
        reference: NaiveDate,
    ) -> ResultEngine<Report> {
        let period_key = PeriodKey::containing(period, reference);
        let (from, to) = period_key.range()?;

        let mut total_income = MoneyCents::ZERO;
        let mut total_expense = MoneyCents::ZERO;
        for transaction in self.transactions_between(user_id, from, to).await? {
            match transaction.kind {
                TransactionKind::Income => {
                    total_income = total_income.checked_add(transaction.amount)?;
                }
                TransactionKind::Expense => {
                    total_expense = total_expense.checked_add(transaction.amount)?;
                }
            }
        }

        debug!(user_id = %user_id, "generated {} report for {period_key}", period.as_str());
        Ok(Report {
            period,
            period_key,
            total_income,
            total_expense,
            savings: total_income.checked_sub(total_expense)?,
        })
    }
}
