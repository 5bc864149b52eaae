mod common;

use engine::{MoneyCents, NewTransactionCmd, Period, PeriodKey, Report};

use common::{date, engine_with_users, money};

#[tokio::test]
async fn monthly_report_sums_income_and_expense() {
    let (engine, alice, _bob) = engine_with_users().await;
    engine
        .add_transaction(NewTransactionCmd::income(
            alice,
            "Salary",
            money("5000"),
            date(2024, 10, 1),
        ))
        .await
        .unwrap();
    engine
        .add_transaction(NewTransactionCmd::expense(
            alice,
            "Food",
            money("200"),
            date(2024, 10, 31),
        ))
        .await
        .unwrap();

    let report = engine
        .generate_report(alice, Period::Monthly, date(2024, 10, 11))
        .await
        .unwrap();

    assert_eq!(
        report,
        Report {
            period: Period::Monthly,
            period_key: PeriodKey::Month {
                year: 2024,
                month: 10
            },
            total_income: money("5000"),
            total_expense: money("200"),
            savings: money("4800"),
        }
    );
    assert_eq!(report.period_key.to_string(), "2024-10");
}

#[tokio::test]
async fn monthly_report_ignores_neighbouring_months() {
    let (engine, alice, _bob) = engine_with_users().await;
    for day in [date(2024, 9, 30), date(2024, 11, 1), date(2023, 10, 15)] {
        engine
            .add_transaction(NewTransactionCmd::expense(alice, "Food", money("10"), day))
            .await
            .unwrap();
    }

    let report = engine
        .generate_report(alice, Period::Monthly, date(2024, 10, 11))
        .await
        .unwrap();

    assert_eq!(report.total_income, money("0"));
    assert_eq!(report.total_expense, money("0"));
    assert_eq!(report.savings, money("0"));
}

#[tokio::test]
async fn yearly_report_spans_all_months_of_the_year() {
    let (engine, alice, _bob) = engine_with_users().await;
    let rows = [
        (date(2024, 1, 1), "income", "1000"),
        (date(2024, 6, 15), "expense", "300.25"),
        (date(2024, 12, 31), "expense", "100"),
        (date(2023, 12, 31), "income", "9999"),
        (date(2025, 1, 1), "expense", "9999"),
    ];
    for (day, kind, amount) in rows {
        engine
            .add_transaction(NewTransactionCmd::new(
                alice,
                kind.parse().unwrap(),
                "Misc",
                money(amount),
                day,
            ))
            .await
            .unwrap();
    }

    let report = engine
        .generate_report(alice, Period::Yearly, date(2024, 10, 11))
        .await
        .unwrap();

    assert_eq!(report.period_key, PeriodKey::Year(2024));
    assert_eq!(report.total_income, money("1000"));
    assert_eq!(report.total_expense, money("400.25"));
    assert_eq!(report.savings, money("599.75"));
}

#[tokio::test]
async fn report_excludes_other_users_and_allows_negative_savings() {
    let (engine, alice, bob) = engine_with_users().await;
    engine
        .add_transaction(NewTransactionCmd::income(
            bob,
            "Salary",
            money("3000"),
            date(2024, 10, 1),
        ))
        .await
        .unwrap();
    engine
        .add_transaction(NewTransactionCmd::expense(
            alice,
            "Rent",
            money("900"),
            date(2024, 10, 1),
        ))
        .await
        .unwrap();

    let report = engine
        .generate_report(alice, Period::Monthly, date(2024, 10, 20))
        .await
        .unwrap();

    assert_eq!(report.total_income, money("0"));
    assert_eq!(report.total_expense, money("900"));
    assert_eq!(report.savings, money("-900"));
}

#[tokio::test]
async fn yearly_report_handles_amounts_at_the_entry_limit() {
    let (engine, alice, _bob) = engine_with_users().await;
    let max = MoneyCents::MAX_ENTRY;
    for month in 1..=12 {
        engine
            .add_transaction(NewTransactionCmd::income(
                alice,
                "Salary",
                max,
                date(2024, month, 1),
            ))
            .await
            .unwrap();
        engine
            .add_transaction(NewTransactionCmd::expense(
                alice,
                "Rent",
                max,
                date(2024, month, 2),
            ))
            .await
            .unwrap();
    }
    engine
        .add_transaction(NewTransactionCmd::expense(
            alice,
            "Car",
            max,
            date(2024, 12, 31),
        ))
        .await
        .unwrap();

    let report = engine
        .generate_report(alice, Period::Yearly, date(2024, 6, 15))
        .await
        .unwrap();

    assert_eq!(report.total_income, MoneyCents::new(max.cents() * 12));
    assert_eq!(report.total_expense, MoneyCents::new(max.cents() * 13));
    assert_eq!(report.savings, MoneyCents::new(-max.cents()));
}
