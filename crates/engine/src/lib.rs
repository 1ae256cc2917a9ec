//! Core of the survey expense tracker.
//!
//! The engine knows nothing about storage or presentation. It holds the
//! [`Expense`] record, derives its financial values ([`calculator`]), selects
//! records ([`filter`]) and builds report values ([`report`]).
//!
//! ```rust
//! use engine::{Expense, Money, RateLine, calculator, report};
//!
//! let mut expense = Expense {
//!     closed_value: Money::new(500_000),
//!     ..Expense::default()
//! };
//! expense.costs.questionnaire = RateLine::new(1.5, Money::new(1_000));
//! expense.costs.statistician = Money::new(40_000);
//! expense.refresh_totals();
//!
//! assert_eq!(expense.total_expense, Money::new(41_500));
//! assert_eq!(calculator::cost_breakdown(&expense).len(), 2);
//! assert_eq!(report::performance_tier(&expense), report::PerformanceTier::Excellent);
//! ```
pub use calculator::{BreakdownEntry, CostCategory};
pub use entry::ItemizedCost;
pub use error::EngineError;
pub use expense::{Costs, Expense, ExpensePatch, MAX_AMOUNT, MAX_QUANTITY, RateLine, YesNo};
pub use filter::FilterCriteria;
pub use money::Money;
pub use report::{PerformanceTier, PieSlice, Report, SummaryTotals};

pub mod calculator;
pub mod catalog;
pub mod entry;
mod error;
mod expense;
pub mod filter;
mod money;
pub mod report;

#[cfg(test)]
mod testing;

pub type ResultEngine<T> = Result<T, EngineError>;
