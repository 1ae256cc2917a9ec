//! Derived values of an expense record: total expense, profit, the per
//! category cost breakdown and trip length.
//!
//! Everything here is pure and total: missing costs are zero and malformed
//! dates count as a zero-day trip.
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{Costs, Expense, Money};

/// Cost categories, in breakdown order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Questionnaire,
    CarDiem,
    MealDiem,
    Lodging,
    Fuel,
    System,
    MotoTaxi,
    Statistician,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 9] = [
        Self::Questionnaire,
        Self::CarDiem,
        Self::MealDiem,
        Self::Lodging,
        Self::Fuel,
        Self::System,
        Self::MotoTaxi,
        Self::Statistician,
        Self::Other,
    ];

    /// Legend label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Questionnaire => "Questionário",
            Self::CarDiem => "Diária Carro",
            Self::MealDiem => "Diária Alimentação",
            Self::Lodging => "Hospedagem",
            Self::Fuel => "Gasolina",
            Self::System => "Sistema",
            Self::MotoTaxi => "Moto Táxi",
            Self::Statistician => "Estatístico",
            Self::Other => "Outros Custos",
        }
    }

    /// Fixed chart colour (hex RGB).
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Questionnaire => "#FF0000",
            Self::CarDiem => "#FF6384",
            Self::MealDiem => "#36A2EB",
            Self::Lodging => "#FFCE56",
            Self::Fuel => "#4BC0C0",
            Self::System => "#9966FF",
            Self::MotoTaxi => "#FF9900",
            Self::Statistician => "#C9CBCE",
            Self::Other => "#8B4513",
        }
    }
}

impl Costs {
    /// Amount of every category, in breakdown order.
    #[must_use]
    pub fn lines(&self) -> [(CostCategory, Money); 9] {
        [
            (CostCategory::Questionnaire, self.questionnaire.subtotal()),
            (CostCategory::CarDiem, self.car_diem.subtotal()),
            (CostCategory::MealDiem, self.meal_diem.subtotal()),
            (CostCategory::Lodging, self.lodging),
            (CostCategory::Fuel, self.fuel),
            (CostCategory::System, self.system),
            (CostCategory::MotoTaxi, self.moto_taxi),
            (CostCategory::Statistician, self.statistician),
            (CostCategory::Other, self.other),
        ]
    }

    #[must_use]
    pub fn total(&self) -> Money {
        self.lines().iter().map(|(_, amount)| *amount).sum()
    }
}

/// One slice of a cost breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub category: CostCategory,
    pub label: &'static str,
    pub amount: Money,
    pub color: &'static str,
}

impl BreakdownEntry {
    #[must_use]
    pub fn new(category: CostCategory, amount: Money) -> Self {
        Self {
            category,
            label: category.label(),
            amount,
            color: category.color(),
        }
    }
}

/// Sum of all nine cost components. Per-unit lines are rounded to the
/// centavo before summing.
#[must_use]
pub fn total_expense(expense: &Expense) -> Money {
    expense.costs.total()
}

/// Closed value minus total expense. May be negative.
#[must_use]
pub fn profit(expense: &Expense) -> Money {
    expense.closed_value - total_expense(expense)
}

/// Categories with a strictly positive amount, in the fixed category order.
#[must_use]
pub fn cost_breakdown(expense: &Expense) -> Vec<BreakdownEntry> {
    expense
        .costs
        .lines()
        .into_iter()
        .filter(|(_, amount)| amount.is_positive())
        .map(|(category, amount)| BreakdownEntry::new(category, amount))
        .collect()
}

/// Whole days from `start` to `end`, rounded up.
///
/// Accepts `YYYY-MM-DD` dates and RFC 3339 timestamps. Returns 0 when either
/// value does not parse or when `end` is not after `start`.
#[must_use]
pub fn days_between(start: &str, end: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_instant(start), parse_instant(end)) else {
        return 0;
    };
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    let days = millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis % MILLIS_PER_DAY != 0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Whole days from `start` to `end`, zero when `end` is not after `start`.
#[must_use]
pub fn days_between_dates(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days();
    if days <= 0 {
        return 0;
    }
    u32::try_from(days).unwrap_or(u32::MAX)
}

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|instant| instant.naive_utc())
}
