use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Amount of money in **integer cents**, currency-agnostic.
///
/// Transaction amounts, budgets and report totals all use this type, so
/// budget thresholds are compared with exact integer equality.
///
/// Arithmetic is checked: sums that would leave the `i64` range fail with
/// [`EngineError::InvalidInput`] instead of wrapping.
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount: MoneyCents = "12,34".parse().unwrap();
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Largest amount a single transaction or budget may hold
    /// (100 000 000 000.00).
    pub const MAX_ENTRY: MoneyCents = MoneyCents(10_000_000_000_000);

    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: MoneyCents) -> ResultEngine<MoneyCents> {
        self.0
            .checked_add(rhs.0)
            .map(MoneyCents)
            .ok_or_else(|| out_of_range(self, '+', rhs))
    }

    pub fn checked_sub(self, rhs: MoneyCents) -> ResultEngine<MoneyCents> {
        self.0
            .checked_sub(rhs.0)
            .map(MoneyCents)
            .ok_or_else(|| out_of_range(self, '-', rhs))
    }

    /// Sums `amounts`, zero when empty.
    pub fn total<I>(amounts: I) -> ResultEngine<MoneyCents>
    where
        I: IntoIterator<Item = MoneyCents>,
    {
        amounts
            .into_iter()
            .try_fold(MoneyCents::ZERO, MoneyCents::checked_add)
    }
}

fn out_of_range(lhs: MoneyCents, op: char, rhs: MoneyCents) -> EngineError {
    EngineError::InvalidInput(format!("amount out of range: {lhs} {op} {rhs}"))
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Accepts an optional sign, `.` or `,` as decimal separator and at most
    /// two decimals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidInput(format!("invalid amount: {s}"));

        let raw = s.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, raw.strip_prefix('+').unwrap_or(raw).trim_start()),
        };
        if digits.is_empty() {
            return Err(EngineError::InvalidInput("empty amount".to_string()));
        }

        let (whole, fraction) = digits.split_once(['.', ',']).unwrap_or((digits, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => fraction.parse::<i64>().map_err(|_| invalid())?,
            _ => return Err(EngineError::InvalidInput("too many decimals".to_string())),
        };

        let total = whole
            .parse::<i64>()
            .ok()
            .and_then(|units| units.checked_mul(100))
            .and_then(|value| value.checked_add(cents))
            .ok_or_else(|| EngineError::InvalidInput("amount too large".to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }
}
