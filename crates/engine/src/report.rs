//! Report-ready values built from calculator and filter outputs.
//!
//! Stateless: every function works on the collection it is given.
use serde::Serialize;

use crate::{
    BreakdownEntry, CostCategory, Expense, FilterCriteria, Money, calculator, filter,
};

/// Footer totals of a record collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SummaryTotals {
    pub count: usize,
    pub total_expense: Money,
    pub total_profit: Money,
}

/// Profit-margin classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Attention,
}

impl PerformanceTier {
    /// `>= 50` is excellent, `>= 30` good, anything lower needs attention.
    #[must_use]
    pub fn from_margin(margin_percentage: f64) -> Self {
        if margin_percentage >= 50.0 {
            Self::Excellent
        } else if margin_percentage >= 30.0 {
            Self::Good
        } else {
            Self::Attention
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Attention => "Attention",
        }
    }
}

impl core::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Total expense and profit of one record as reported.
///
/// Stored totals are authoritative (the backend may recompute them); stale
/// ones are recomputed instead.
#[must_use]
pub fn reported_totals(expense: &Expense) -> (Money, Money) {
    if expense.totals_are_stale() {
        (
            calculator::total_expense(expense),
            calculator::profit(expense),
        )
    } else {
        (expense.total_expense, expense.profit)
    }
}

/// Sums [`reported_totals`] over `records`.
#[must_use]
pub fn summary_totals<'a, I>(records: I) -> SummaryTotals
where
    I: IntoIterator<Item = &'a Expense>,
{
    records
        .into_iter()
        .fold(SummaryTotals::default(), |mut acc, expense| {
            let (total, profit) = reported_totals(expense);
            acc.count += 1;
            acc.total_expense += total;
            acc.total_profit += profit;
            acc
        })
}

/// `amount / total * 100`, rounded to one decimal. Zero when `total` is zero.
#[must_use]
pub fn percentage_of_total(amount: Money, total: Money) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    round_one_decimal(amount.cents() as f64 / total.cents() as f64 * 100.0)
}

/// Profit as a percentage of the closed value. Zero when the closed value is
/// zero.
#[must_use]
pub fn profit_margin_percentage(expense: &Expense) -> f64 {
    round_one_decimal(margin_ratio(expense))
}

/// Tier of the exact margin; the one-decimal display value may round across a
/// threshold.
#[must_use]
pub fn performance_tier(expense: &Expense) -> PerformanceTier {
    PerformanceTier::from_margin(margin_ratio(expense))
}

fn margin_ratio(expense: &Expense) -> f64 {
    if expense.closed_value.is_zero() {
        return 0.0;
    }
    calculator::profit(expense).cents() as f64 / expense.closed_value.cents() as f64 * 100.0
}

/// Cost breakdown summed across `records`, same order and zero-omission
/// rules as [`calculator::cost_breakdown`].
#[must_use]
pub fn category_totals<'a, I>(records: I) -> Vec<BreakdownEntry>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut sums = [Money::ZERO; CostCategory::ALL.len()];
    for expense in records {
        for (slot, (_, amount)) in sums.iter_mut().zip(expense.costs.lines()) {
            *slot += amount;
        }
    }
    CostCategory::ALL
        .into_iter()
        .zip(sums)
        .filter(|(_, amount)| amount.is_positive())
        .map(|(category, amount)| BreakdownEntry::new(category, amount))
        .collect()
}

/// Geometry of one pie-chart slice. Angles are degrees, clockwise from
/// 12 o'clock.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub entry: BreakdownEntry,
    pub percentage: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub large_arc: bool,
}

impl PieSlice {
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

/// Lays the breakdown out as consecutive slices of a full circle.
#[must_use]
pub fn pie_slices(breakdown: &[BreakdownEntry]) -> Vec<PieSlice> {
    let total: Money = breakdown.iter().map(|entry| entry.amount).sum();
    if !total.is_positive() {
        return Vec::new();
    }

    let mut start_angle = 0.0;
    breakdown
        .iter()
        .map(|entry| {
            let sweep_angle = entry.amount.cents() as f64 / total.cents() as f64 * 360.0;
            let slice = PieSlice {
                entry: entry.clone(),
                percentage: percentage_of_total(entry.amount, total),
                start_angle,
                sweep_angle,
                large_arc: sweep_angle > 180.0,
            };
            start_angle += sweep_angle;
            slice
        })
        .collect()
}

/// Filtered rows plus their totals and combined breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<Expense>,
    pub totals: SummaryTotals,
    pub breakdown: Vec<BreakdownEntry>,
}

impl Report {
    #[must_use]
    pub fn build(records: &[Expense], criteria: &FilterCriteria) -> Self {
        let rows = filter::filter_owned(records, criteria);
        let totals = summary_totals(&rows);
        let breakdown = category_totals(&rows);
        Self {
            rows,
            totals,
            breakdown,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
