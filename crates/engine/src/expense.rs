//! The module contains the representation of a survey expense record.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, ResultEngine, calculator, catalog};

/// Largest accepted amount: R$ 1 bilhão.
pub const MAX_AMOUNT: Money = Money::new(100_000_000_000);

/// Largest accepted quantity of a per-unit cost line.
pub const MAX_QUANTITY: f64 = 1_000_000.0;

/// Boolean-like answer stored as `"sim"` / `"nao"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "sim")]
    Yes,
    #[default]
    #[serde(rename = "nao")]
    No,
}

impl YesNo {
    /// Canonical value used by the storage schema.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "sim",
            Self::No => "nao",
        }
    }

    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl core::fmt::Display for YesNo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for YesNo {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sim" => Ok(Self::Yes),
            "nao" => Ok(Self::No),
            other => Err(EngineError::validation(
                "yes/no value",
                format!("expected \"sim\" or \"nao\", got \"{other}\""),
            )),
        }
    }
}

/// A cost priced per unit: questionnaires or per-diem days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateLine {
    pub quantity: f64,
    pub unit_price: Money,
}

impl RateLine {
    #[must_use]
    pub const fn new(quantity: f64, unit_price: Money) -> Self {
        Self {
            quantity,
            unit_price,
        }
    }

    /// Quantity × unit price, rounded to the centavo.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The nine cost components of an engagement.
///
/// Missing components deserialize as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Costs {
    pub questionnaire: RateLine,
    pub car_diem: RateLine,
    pub meal_diem: RateLine,
    pub lodging: Money,
    pub fuel: Money,
    pub system: Money,
    pub moto_taxi: Money,
    pub statistician: Money,
    pub other: Money,
}

/// One election-research survey engagement and its costs.
///
/// `total_expense` and `profit` are derived: call [`Expense::refresh_totals`]
/// after changing costs or the closed value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub state: String,
    pub city: String,
    pub institute: String,
    pub registered: YesNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub has_contractor: YesNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_name: Option<String>,
    #[serde(default)]
    pub researcher_count: u32,
    #[serde(default)]
    pub researcher_names: Vec<String>,
    #[serde(default)]
    pub closed_value: Money,
    #[serde(default)]
    pub costs: Costs,
    #[serde(default)]
    pub total_expense: Money,
    #[serde(default)]
    pub profit: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Recomputes the derived `total_expense` and `profit` fields.
    pub fn refresh_totals(&mut self) {
        self.total_expense = calculator::total_expense(self);
        self.profit = calculator::profit(self);
    }

    /// Returns `true` when the stored derived fields disagree with the costs.
    #[must_use]
    pub fn totals_are_stale(&self) -> bool {
        self.total_expense != calculator::total_expense(self)
            || self.profit != calculator::profit(self)
    }

    /// Sets the researcher count, truncating or padding the name list so both
    /// stay in sync. New slots hold empty names.
    pub fn set_researcher_count(&mut self, count: u32) {
        self.researcher_count = count;
        self.researcher_names.resize(count as usize, String::new());
    }

    pub fn set_researcher_name(&mut self, index: usize, name: &str) -> ResultEngine<()> {
        let slot = self
            .researcher_names
            .get_mut(index)
            .ok_or_else(|| EngineError::KeyNotFound(format!("researcher #{}", index + 1)))?;
        *slot = name.to_string();
        Ok(())
    }

    /// Removes one researcher; the count follows the new list length.
    pub fn remove_researcher(&mut self, index: usize) -> ResultEngine<String> {
        if index >= self.researcher_names.len() {
            return Err(EngineError::KeyNotFound(format!(
                "researcher #{}",
                index + 1
            )));
        }
        let removed = self.researcher_names.remove(index);
        self.researcher_count = self.researcher_names.len() as u32;
        Ok(removed)
    }

    /// Checks the record before it is stored.
    ///
    /// End dates before start dates are accepted. Institutes outside the
    /// catalog are accepted too, see [`catalog::is_known_institute`].
    pub fn validate(&self) -> ResultEngine<()> {
        if self.state.trim().is_empty() {
            return Err(EngineError::validation("state", "state is required"));
        }
        if !catalog::is_known_state(&self.state) {
            return Err(EngineError::validation(
                "state",
                format!("unknown state \"{}\"", self.state),
            ));
        }
        if self.city.trim().is_empty() {
            return Err(EngineError::validation("city", "city is required"));
        }
        if !catalog::contains_city(&self.state, &self.city) {
            return Err(EngineError::validation(
                "city",
                format!("\"{}\" is not a city of {}", self.city, self.state),
            ));
        }
        if self.institute.trim().is_empty() {
            return Err(EngineError::validation(
                "institute",
                "research institute is required",
            ));
        }
        if self.registered.is_yes() && is_blank(self.registration_number.as_deref()) {
            return Err(EngineError::validation(
                "registration number",
                "required when the survey is registered",
            ));
        }
        if self.has_contractor.is_yes() && is_blank(self.contractor_name.as_deref()) {
            return Err(EngineError::validation(
                "contractor name",
                "required when there is a contracting party",
            ));
        }
        if self.researcher_names.len() != self.researcher_count as usize {
            return Err(EngineError::validation(
                "researchers",
                format!(
                    "{} names for {} researchers",
                    self.researcher_names.len(),
                    self.researcher_count
                ),
            ));
        }
        if self.closed_value.is_negative() {
            return Err(EngineError::validation(
                "closed value",
                "must not be negative",
            ));
        }
        if self.closed_value > MAX_AMOUNT {
            return Err(EngineError::validation("closed value", too_large()));
        }

        let lines = [
            ("questionnaire", &self.costs.questionnaire),
            ("car per-diem", &self.costs.car_diem),
            ("meal per-diem", &self.costs.meal_diem),
        ];
        for (field, line) in lines {
            if !line.quantity.is_finite() || line.quantity < 0.0 {
                return Err(EngineError::validation(
                    field,
                    "quantity must be a non-negative number",
                ));
            }
            if line.quantity > MAX_QUANTITY {
                return Err(EngineError::validation(
                    field,
                    format!("quantity must not exceed {MAX_QUANTITY}"),
                ));
            }
            if line.unit_price.is_negative() {
                return Err(EngineError::validation(
                    field,
                    "unit price must not be negative",
                ));
            }
            if line.unit_price > MAX_AMOUNT {
                return Err(EngineError::validation(field, too_large()));
            }
        }

        let flat = [
            ("lodging", self.costs.lodging),
            ("fuel", self.costs.fuel),
            ("system cost", self.costs.system),
            ("moto-taxi", self.costs.moto_taxi),
            ("statistician cost", self.costs.statistician),
            ("other costs", self.costs.other),
        ];
        for (field, amount) in flat {
            if amount.is_negative() {
                return Err(EngineError::validation(field, "must not be negative"));
            }
            if amount > MAX_AMOUNT {
                return Err(EngineError::validation(field, too_large()));
            }
        }

        Ok(())
    }

    /// Merges the fields present in `patch` into the record.
    ///
    /// Derived fields are copied as given; call [`Expense::refresh_totals`]
    /// afterwards.
    pub fn apply_patch(&mut self, patch: &ExpensePatch) {
        if let Some(date) = patch.start_date {
            self.start_date = date;
        }
        if let Some(date) = patch.end_date {
            self.end_date = date;
        }
        if let Some(state) = &patch.state {
            self.state = state.clone();
        }
        if let Some(city) = &patch.city {
            self.city = city.clone();
        }
        if let Some(institute) = &patch.institute {
            self.institute = institute.clone();
        }
        if let Some(registered) = patch.registered {
            self.registered = registered;
        }
        if let Some(number) = &patch.registration_number {
            self.registration_number = non_blank(number);
        }
        if let Some(has_contractor) = patch.has_contractor {
            self.has_contractor = has_contractor;
        }
        if let Some(name) = &patch.contractor_name {
            self.contractor_name = non_blank(name);
        }
        if let Some(count) = patch.researcher_count {
            self.researcher_count = count;
        }
        if let Some(names) = &patch.researcher_names {
            self.researcher_names = names.clone();
        }
        if let Some(value) = patch.closed_value {
            self.closed_value = value;
        }
        if let Some(line) = patch.questionnaire {
            self.costs.questionnaire = line;
        }
        if let Some(line) = patch.car_diem {
            self.costs.car_diem = line;
        }
        if let Some(line) = patch.meal_diem {
            self.costs.meal_diem = line;
        }
        if let Some(amount) = patch.lodging {
            self.costs.lodging = amount;
        }
        if let Some(amount) = patch.fuel {
            self.costs.fuel = amount;
        }
        if let Some(amount) = patch.system {
            self.costs.system = amount;
        }
        if let Some(amount) = patch.moto_taxi {
            self.costs.moto_taxi = amount;
        }
        if let Some(amount) = patch.statistician {
            self.costs.statistician = amount;
        }
        if let Some(amount) = patch.other {
            self.costs.other = amount;
        }
        if let Some(total) = patch.total_expense {
            self.total_expense = total;
        }
        if let Some(profit) = patch.profit {
            self.profit = profit;
        }
    }
}

/// Partial update of an [`Expense`]: only the present fields change.
///
/// An empty registration number or contractor name clears the stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_contractor: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub researcher_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub researcher_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_value: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<RateLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_diem: Option<RateLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_diem: Option<RateLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lodging: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moto_taxi: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistician: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_expense: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<Money>,
}

fn too_large() -> String {
    format!("must not exceed {MAX_AMOUNT}")
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
