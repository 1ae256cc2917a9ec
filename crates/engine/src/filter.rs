//! Multi-criteria selection of expense records.
//!
//! Criteria compare with exact, case-sensitive string equality and combine
//! with AND. Keeping the city consistent with the selected state is the
//! caller's job, see [`FilterCriteria::select_state`].
use serde::{Deserialize, Serialize};

use crate::{Expense, catalog};

/// Selector value meaning "no restriction".
pub const ALL: &str = "all";

/// Independent equality criteria. `None` matches anything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub state: Option<String>,
    pub city: Option<String>,
    pub institute: Option<String>,
    /// Registration status as stored: `"sim"` or `"nao"`.
    pub registered: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from raw selector values; `"all"` or an empty string
    /// disables a criterion.
    #[must_use]
    pub fn from_selectors(state: &str, city: &str, institute: &str, registered: &str) -> Self {
        Self {
            state: selected(state),
            city: selected(city),
            institute: selected(institute),
            registered: selected(registered),
        }
    }

    /// Returns `true` when no criterion is set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.state.is_none()
            && self.city.is_none()
            && self.institute.is_none()
            && self.registered.is_none()
    }

    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        self.state.as_ref().is_none_or(|s| *s == expense.state)
            && self.city.as_ref().is_none_or(|c| *c == expense.city)
            && self
                .institute
                .as_ref()
                .is_none_or(|i| *i == expense.institute)
            && self
                .registered
                .as_ref()
                .is_none_or(|r| r == expense.registered.as_str())
    }

    /// Selects a state. A selected city that does not belong to the new state
    /// resets to "all".
    pub fn select_state(&mut self, state: &str) {
        self.state = selected(state);
        if let (Some(state), Some(city)) = (&self.state, &self.city)
            && !catalog::contains_city(state, city)
        {
            self.city = None;
        }
    }

    /// Selects a city. A city outside the selected state's list resets to
    /// "all".
    pub fn select_city(&mut self, city: &str) {
        self.city = selected(city);
        if let (Some(state), Some(city)) = (&self.state, &self.city)
            && !catalog::contains_city(state, city)
        {
            self.city = None;
        }
    }
}

/// Keeps the records matching every criterion, in input order.
#[must_use]
pub fn filter<'a>(records: &'a [Expense], criteria: &FilterCriteria) -> Vec<&'a Expense> {
    records
        .iter()
        .filter(|expense| criteria.matches(expense))
        .collect()
}

/// Owned variant of [`filter`].
#[must_use]
pub fn filter_owned(records: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    filter(records, criteria).into_iter().cloned().collect()
}

fn selected(value: &str) -> Option<String> {
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{reference_expense, second_expense};

    fn records() -> Vec<Expense> {
        let mut third = reference_expense();
        third.id = Some("3".to_string());
        third.city = "Parnaíba".to_string();
        third.institute = "Estimativa".to_string();
        vec![reference_expense(), second_expense(), third]
    }

    fn ids(found: &[&Expense]) -> Vec<String> {
        found.iter().filter_map(|e| e.id.clone()).collect()
    }

    #[test]
    fn all_selectors_are_identity() {
        let records = records();
        let criteria = FilterCriteria::from_selectors(ALL, ALL, ALL, ALL);
        assert!(criteria.is_unrestricted());
        assert_eq!(filter_owned(&records, &criteria), records);
        assert_eq!(filter_owned(&records, &FilterCriteria::default()), records);
    }

    #[test]
    fn state_criterion_keeps_only_that_state() {
        let records = records();
        let criteria = FilterCriteria::from_selectors("PI", ALL, ALL, ALL);
        let found = filter(&records, &criteria);
        assert!(found.iter().all(|e| e.state == "PI"));
        assert_eq!(ids(&found), ["1", "3"]);
    }

    #[test]
    fn criteria_intersect() {
        let records = records();
        let criteria = FilterCriteria::from_selectors("PI", ALL, "Estimativa", ALL);
        assert_eq!(ids(&filter(&records, &criteria)), ["3"]);

        let criteria = FilterCriteria::from_selectors("MA", "Teresina", ALL, ALL);
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn registration_compares_stored_value() {
        let records = records();
        let criteria = FilterCriteria::from_selectors(ALL, ALL, ALL, "nao");
        assert_eq!(ids(&filter(&records, &criteria)), ["2"]);

        let criteria = FilterCriteria::from_selectors(ALL, ALL, ALL, "Sim");
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let records = records();
        let criteria = FilterCriteria::from_selectors("pi", ALL, ALL, ALL);
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn empty_input_is_empty_output() {
        let criteria = FilterCriteria::from_selectors("PI", ALL, ALL, ALL);
        assert!(filter(&[], &criteria).is_empty());
    }

    #[test]
    fn changing_state_drops_foreign_city() {
        let mut criteria = FilterCriteria::default();
        criteria.select_state("PI");
        criteria.select_city("Teresina");
        assert_eq!(criteria.city.as_deref(), Some("Teresina"));

        criteria.select_state("PI");
        assert_eq!(criteria.city.as_deref(), Some("Teresina"));

        criteria.select_state("MA");
        assert_eq!(criteria.city, None);
    }

    #[test]
    fn selecting_foreign_city_resets_it() {
        let mut criteria = FilterCriteria::default();
        criteria.select_state("MA");
        criteria.select_city("Teresina");
        assert_eq!(criteria.city, None);

        criteria.select_state(ALL);
        criteria.select_city("Teresina");
        assert_eq!(criteria.city.as_deref(), Some("Teresina"));
    }
}
