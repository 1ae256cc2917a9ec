use std::{collections::HashMap, fs, path::Path, time::Duration};

use engine::{Expense, ExpensePatch, ItemizedCost, entry};
use gateway::ExpenseGateway;
use tracing::{error, info};

use crate::{
    cli::{Command, EntryArgs, FilterArgs, ReceiptKind},
    error::Result,
    export, render,
    store::ExpenseStore,
};

/// Runs one subcommand against `store`.
pub async fn run<G>(store: &ExpenseStore<G>, command: Command, poll_interval: Duration) -> Result<()>
where
    G: ExpenseGateway + 'static,
{
    match command {
        Command::List(filters) => {
            refresh(store).await;
            println!("{}", render::table(&store.report(&filters.criteria()).await));
        }
        Command::Show { id } => {
            refresh(store).await;
            println!("{}", render::detail(&store.get(&id).await?));
        }
        Command::Summary(filters) => {
            refresh(store).await;
            println!("{}", render::summary(&store.report(&filters.criteria()).await));
        }
        Command::Add { file, entry } => {
            let mut expense: Expense = read_json(&file)?;
            apply_entry(&mut expense, &entry)?;
            let stored = store.add(expense).await?;
            println!("{}", render::detail(&stored));
        }
        Command::Edit { id, file } => {
            let patch: ExpensePatch = read_json(&file)?;
            let stored = store.update(&id, &patch).await?;
            println!("{}", render::detail(&stored));
        }
        Command::Delete { id } => {
            store.remove(&id).await?;
            println!("Despesa {id} excluída.");
        }
        Command::Export { file, filters } => {
            let rows = store.search(&filters.criteria()).await?;
            let count = export::write_csv(fs::File::create(&file)?, &rows)?;
            info!("exported {count} expenses to {}", file.display());
        }
        Command::Watch(filters) => watch(store, &filters, poll_interval).await?,
        Command::Catalog { state } => println!("{}", render::catalog_listing(state.as_deref())),
    }
    Ok(())
}

/// Reports a failed fetch and keeps going with the cached records.
async fn refresh<G>(store: &ExpenseStore<G>)
where
    G: ExpenseGateway + 'static,
{
    if let Err(err) = store.load().await {
        error!("could not load expenses, showing cached data: {err}");
    }
}

async fn watch<G>(store: &ExpenseStore<G>, filters: &FilterArgs, interval: Duration) -> Result<()>
where
    G: ExpenseGateway + 'static,
{
    let criteria = filters.criteria();
    refresh(store).await;
    println!("{}", render::summary(&store.report(&criteria).await));

    let mut changes = store.subscribe();
    changes.borrow_and_update();
    let polling = store.start_polling(interval);
    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal?;
                break;
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("\n{}", render::summary(&store.report(&criteria).await));
            }
        }
    }
    polling.stop();
    info!("stopped watching");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Applies the entry-form helpers requested on the command line.
fn apply_entry(expense: &mut Expense, args: &EntryArgs) -> Result<()> {
    if args.trip_days {
        let days = entry::apply_trip_dates(expense);
        info!("per-diem quantities set to {days} day(s)");
    }
    if let Some(rate) = args.meal_rate {
        entry::apply_meal_rate(expense, rate);
    }

    let mut receipts: HashMap<ReceiptKind, ItemizedCost> = HashMap::new();
    for receipt in &args.receipts {
        receipts
            .entry(receipt.kind)
            .or_default()
            .push_input(&receipt.amount)?;
    }
    for (kind, items) in receipts {
        let slot = match kind {
            ReceiptKind::Fuel => &mut expense.costs.fuel,
            ReceiptKind::Lodging => &mut expense.costs.lodging,
            ReceiptKind::MotoTaxi => &mut expense.costs.moto_taxi,
            ReceiptKind::Other => &mut expense.costs.other,
        };
        *slot = items.total();
    }
    Ok(())
}
