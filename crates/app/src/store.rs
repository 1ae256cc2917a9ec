//! Session state: the record collection, its cache and the background refresh.
use std::{sync::Arc, time::Duration};

use engine::{Expense, ExpensePatch, FilterCriteria, Report};
use gateway::ExpenseGateway;
use tokio::{
    sync::{RwLock, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};

use crate::{
    cache::ExpenseCache,
    error::{AppError, Result},
};

/// Owns the gateway and the in-memory collection for one session.
///
/// Every successful write reconciles the collection with the stored record
/// and rewrites the cache.
pub struct ExpenseStore<G> {
    gateway: Arc<G>,
    records: Arc<RwLock<Vec<Expense>>>,
    cache: Arc<ExpenseCache>,
    revision: Arc<watch::Sender<u64>>,
}

impl<G> ExpenseStore<G>
where
    G: ExpenseGateway + 'static,
{
    /// Creates a session whose collection starts as the cached records, so
    /// writes made before any [`load`](Self::load) keep the rest of the cache.
    pub fn new(gateway: G, cache: ExpenseCache) -> Self {
        let cached = cache.load().unwrap_or_else(|err| {
            warn!("ignoring unreadable cache {}: {err}", cache.path().display());
            Vec::new()
        });
        debug!(count = cached.len(), "seeded from cache");

        let (revision, _) = watch::channel(0);
        Self {
            gateway: Arc::new(gateway),
            records: Arc::new(RwLock::new(cached)),
            cache: Arc::new(cache),
            revision: Arc::new(revision),
        }
    }

    /// Fetches every record from the gateway.
    ///
    /// On fetch failure the cached records stay in place and the error is
    /// returned.
    pub async fn load(&self) -> Result<Vec<Expense>> {
        let fetched = self.gateway.get_all().await?;
        info!(count = fetched.len(), "loaded expenses");
        self.replace(fetched.clone()).await;
        self.persist().await;
        Ok(fetched)
    }

    /// Looks `id` up in the collection, then in the backend.
    pub async fn get(&self, id: &str) -> Result<Expense> {
        if let Some(found) = self
            .records
            .read()
            .await
            .iter()
            .find(|expense| expense.id.as_deref() == Some(id))
        {
            return Ok(found.clone());
        }
        self.gateway
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub async fn add(&self, mut expense: Expense) -> Result<Expense> {
        expense.validate()?;
        expense.refresh_totals();

        let stored = self.gateway.create(&expense).await?;
        info!(id = stored.id.as_deref().unwrap_or_default(), "expense created");
        self.records.write().await.insert(0, stored.clone());
        self.persist().await;
        Ok(stored)
    }

    /// Applies `patch` to record `id`. Totals are always recomputed locally
    /// and sent along; totals given in the patch are ignored.
    pub async fn update(&self, id: &str, patch: &ExpensePatch) -> Result<Expense> {
        let mut next = self.get(id).await?;
        next.apply_patch(patch);
        next.validate()?;
        next.refresh_totals();

        let patch = ExpensePatch {
            total_expense: Some(next.total_expense),
            profit: Some(next.profit),
            ..patch.clone()
        };

        let stored = self.gateway.update(id, &patch).await?;
        info!(id, "expense updated");
        {
            let mut records = self.records.write().await;
            match records
                .iter_mut()
                .find(|expense| expense.id.as_deref() == Some(id))
            {
                Some(slot) => *slot = stored.clone(),
                None => records.insert(0, stored.clone()),
            }
        }
        self.persist().await;
        Ok(stored)
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.gateway.delete(id).await?;
        info!(id, "expense deleted");
        self.records
            .write()
            .await
            .retain(|expense| expense.id.as_deref() != Some(id));
        self.persist().await;
        Ok(())
    }

    /// Filtered listing served by the backend.
    pub async fn search(&self, criteria: &FilterCriteria) -> Result<Vec<Expense>> {
        Ok(self.gateway.get_with_filters(criteria).await?)
    }

    /// Report over the current collection.
    pub async fn report(&self, criteria: &FilterCriteria) -> Report {
        Report::build(&self.records.read().await, criteria)
    }

    /// Receiver that changes after every collection update.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Re-fetches every record each `interval` until the handle is stopped or
    /// dropped. Failures are logged and the collection is left as it was.
    pub fn start_polling(&self, interval: Duration) -> PollingHandle {
        let gateway = Arc::clone(&self.gateway);
        let records = Arc::clone(&self.records);
        let cache = Arc::clone(&self.cache);
        let revision = Arc::clone(&self.revision);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick fires immediately; `load` already fetched.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match gateway.get_all().await {
                    Ok(fetched) => {
                        debug!(count = fetched.len(), "polling refresh");
                        if let Err(err) = cache.save(&fetched) {
                            warn!("failed to write cache: {err}");
                        }
                        *records.write().await = fetched;
                        revision.send_modify(|rev| *rev += 1);
                    }
                    Err(err) => warn!("polling refresh failed: {err}"),
                }
            }
        });
        info!(interval_secs = interval.as_secs_f64(), "polling started");
        PollingHandle { task }
    }

    async fn replace(&self, records: Vec<Expense>) {
        *self.records.write().await = records;
        self.revision.send_modify(|rev| *rev += 1);
    }

    async fn persist(&self) {
        let records = self.records.read().await;
        if let Err(err) = self.cache.save(&records) {
            warn!("failed to write cache: {err}");
        }
        self.revision.send_modify(|rev| *rev += 1);
    }
}

/// Background refresh task. Dropping the handle stops it.
#[derive(Debug)]
pub struct PollingHandle {
    task: JoinHandle<()>,
}

impl PollingHandle {
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
