//! Helpers for the entry workflow.
//!
//! Each helper is invoked explicitly by the form on the matching input
//! change; nothing here watches fields on its own.
use serde::{Deserialize, Serialize};

use crate::{EngineError, Expense, Money, ResultEngine, calculator};

/// Sets the car and meal per-diem quantities to the trip length.
///
/// Call after either trip date changes. Returns the number of days applied.
pub fn apply_trip_dates(expense: &mut Expense) -> u32 {
    let days = calculator::days_between_dates(expense.start_date, expense.end_date);
    expense.costs.car_diem.quantity = f64::from(days);
    expense.costs.meal_diem.quantity = f64::from(days);
    days
}

/// Daily meal price for the whole team: per-researcher rate × researchers.
#[must_use]
pub fn meal_diem_unit_price(per_researcher_rate: Money, researcher_count: u32) -> Money {
    per_researcher_rate.times(f64::from(researcher_count))
}

/// Sets the meal per-diem unit price from a per-researcher rate and the
/// record's current researcher count.
pub fn apply_meal_rate(expense: &mut Expense, per_researcher_rate: Money) {
    expense.costs.meal_diem.unit_price =
        meal_diem_unit_price(per_researcher_rate, expense.researcher_count);
}

/// A flat cost entered as a list of individual receipts (fuel, lodging,
/// moto-taxi, other costs).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemizedCost {
    items: Vec<Money>,
}

impl ItemizedCost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a receipt. Zero and negative amounts are ignored.
    pub fn push(&mut self, amount: Money) -> bool {
        if !amount.is_positive() {
            return false;
        }
        self.items.push(amount);
        true
    }

    /// Parses and adds a receipt typed by the user.
    pub fn push_input(&mut self, input: &str) -> ResultEngine<Money> {
        let amount: Money = input.parse()?;
        if !self.push(amount) {
            return Err(EngineError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(amount)
    }

    pub fn remove(&mut self, index: usize) -> ResultEngine<Money> {
        if index >= self.items.len() {
            return Err(EngineError::KeyNotFound(format!("item #{}", index + 1)));
        }
        Ok(self.items.remove(index))
    }

    #[must_use]
    pub fn items(&self) -> &[Money] {
        &self.items
    }

    #[must_use]
    pub fn total(&self) -> Money {
        self.items.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn trip_dates_drive_both_per_diems() {
        let mut expense = crate::testing::reference_expense();
        assert_eq!(apply_trip_dates(&mut expense), 5);
        assert_eq!(expense.costs.car_diem.quantity, 5.0);
        assert_eq!(expense.costs.meal_diem.quantity, 5.0);

        expense.end_date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(apply_trip_dates(&mut expense), 0);
        assert_eq!(expense.costs.car_diem.quantity, 0.0);
    }

    #[test]
    fn meal_rate_scales_with_team() {
        assert_eq!(meal_diem_unit_price(Money::new(2_500), 3), Money::new(7_500));
        assert_eq!(meal_diem_unit_price(Money::new(2_500), 0), Money::ZERO);

        let mut expense = crate::testing::reference_expense();
        apply_meal_rate(&mut expense, Money::new(3_000));
        assert_eq!(expense.costs.meal_diem.unit_price, Money::new(9_000));
    }

    #[test]
    fn itemized_cost_sums_positive_receipts() {
        let mut fuel = ItemizedCost::new();
        assert!(fuel.push(Money::new(12_000)));
        assert!(!fuel.push(Money::ZERO));
        assert!(!fuel.push(Money::new(-10)));
        assert_eq!(fuel.push_input("80,50").unwrap(), Money::new(8_050));
        assert!(fuel.push_input("0").is_err());
        assert!(fuel.push_input("abc").is_err());
        assert_eq!(fuel.total(), Money::new(20_050));

        assert_eq!(fuel.remove(0).unwrap(), Money::new(12_000));
        assert_eq!(fuel.total(), Money::new(8_050));
        assert!(fuel.remove(3).is_err());
        assert_eq!(fuel.items().len(), 1);
    }
}
