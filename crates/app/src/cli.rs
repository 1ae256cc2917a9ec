use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{FilterCriteria, Money, filter::ALL};

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(
    name = "survey_expenses",
    version,
    about = "Expense tracking for election-research surveys"
)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,
    /// Work on the cached records without contacting the backend.
    #[arg(long, global = true)]
    pub offline: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List expenses with footer totals.
    List(FilterArgs),
    /// Show one expense with its cost breakdown and margin.
    Show { id: String },
    /// Totals and cost distribution of the selected expenses.
    Summary(FilterArgs),
    /// Create an expense from a JSON file.
    Add {
        file: PathBuf,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Apply a partial update read from a JSON file.
    Edit { id: String, file: PathBuf },
    Delete { id: String },
    /// Write the selected expenses to a CSV file.
    Export {
        file: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Keep refreshing and print the summary after every change (Ctrl-C to
    /// stop).
    Watch(FilterArgs),
    /// List states, cities and research institutes.
    Catalog {
        /// Only list the cities of this state.
        #[arg(long)]
        state: Option<String>,
    },
}

/// Filter selectors; "all" disables a criterion.
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(long, default_value = ALL)]
    pub state: String,
    #[arg(long, default_value = ALL)]
    pub city: String,
    #[arg(long, default_value = ALL)]
    pub institute: String,
    /// "sim", "nao" or "all".
    #[arg(long, default_value = ALL)]
    pub registered: String,
}

impl FilterArgs {
    /// Criteria with the city kept consistent with the state.
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria =
            FilterCriteria::from_selectors(ALL, ALL, &self.institute, &self.registered);
        criteria.select_state(&self.state);
        criteria.select_city(&self.city);
        if criteria.city.is_none() && self.city != ALL && !self.city.is_empty() {
            tracing::warn!(
                "{} is not a city of {}, ignoring the city filter",
                self.city,
                self.state
            );
        }
        criteria
    }
}

/// Entry-form helpers applied before an expense is created.
#[derive(Debug, Default, Args)]
pub struct EntryArgs {
    /// Set both per-diem quantities to the trip length.
    #[arg(long)]
    pub trip_days: bool,
    /// Meal per-diem per researcher; the unit price becomes rate × researchers.
    #[arg(long)]
    pub meal_rate: Option<Money>,
    /// Individual receipt, e.g. `fuel=120,50`. Receipts of one kind replace
    /// that cost with their sum.
    #[arg(long = "receipt", value_parser = parse_receipt)]
    pub receipts: Vec<Receipt>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReceiptKind {
    Fuel,
    Lodging,
    MotoTaxi,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub kind: ReceiptKind,
    pub amount: String,
}

fn parse_receipt(value: &str) -> Result<Receipt, String> {
    let (kind, amount) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=AMOUNT, got \"{value}\""))?;
    let kind = ReceiptKind::from_str(kind.trim(), true)?;
    Ok(Receipt {
        kind,
        amount: amount.trim().to_string(),
    })
}
