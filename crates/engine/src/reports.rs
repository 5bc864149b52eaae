//! Periodic income/expense summaries.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(EngineError::InvalidInput(format!(
                "invalid period: {other} (expected monthly or yearly)"
            ))),
        }
    }
}

/// Calendar bucket a report aggregates over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    Month { year: i32, month: u32 },
    Year(i32),
}

impl PeriodKey {
    /// Bucket of `period` containing `reference`.
    #[must_use]
    pub fn containing(period: Period, reference: NaiveDate) -> Self {
        match period {
            Period::Monthly => Self::Month {
                year: reference.year(),
                month: reference.month(),
            },
            Period::Yearly => Self::Year(reference.year()),
        }
    }

    /// Half-open date range `[start, end)` covered by the bucket.
    pub fn range(self) -> ResultEngine<(NaiveDate, NaiveDate)> {
        let out_of_range = || EngineError::InvalidInput(format!("date out of range: {self}"));
        let (start, end) = match self {
            Self::Month { year, month } => {
                let (next_year, next_month) = if month == 12 {
                    (year + 1, 1)
                } else {
                    (year, month + 1)
                };
                (
                    NaiveDate::from_ymd_opt(year, month, 1),
                    NaiveDate::from_ymd_opt(next_year, next_month, 1),
                )
            }
            Self::Year(year) => (
                NaiveDate::from_ymd_opt(year, 1, 1),
                NaiveDate::from_ymd_opt(year + 1, 1, 1),
            ),
        };
        Ok((start.ok_or_else(out_of_range)?, end.ok_or_else(out_of_range)?))
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Year(year) => write!(f, "{year:04}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub period: Period,
    pub period_key: PeriodKey,
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    /// `total_income - total_expense`; negative when overspending.
    pub savings: MoneyCents,
}
