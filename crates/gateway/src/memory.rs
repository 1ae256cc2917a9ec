use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use engine::{Expense, ExpensePatch, FilterCriteria, filter};
use reqwest::StatusCode;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{ExpenseGateway, GatewayError, Result};

/// In-process gateway for tests and offline sessions.
///
/// Behaves like the REST backend: assigns ids and timestamps, recomputes
/// totals on insert and lists newest first.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    records: RwLock<Vec<Expense>>,
    offline: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `records`, which are taken as already stored.
    pub fn with_records(records: Vec<Expense>) -> Self {
        Self {
            records: RwLock::new(records),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with `503 Service Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(GatewayError::Server {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "backend unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl ExpenseGateway for MemoryGateway {
    async fn get_all(&self) -> Result<Vec<Expense>> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Expense>> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|expense| expense.id.as_deref() == Some(id))
            .cloned())
    }

    async fn create(&self, expense: &Expense) -> Result<Expense> {
        self.ensure_online()?;
        let now = Utc::now();
        let mut stored = expense.clone();
        stored.id = Some(Uuid::new_v4().to_string());
        stored.created_at = Some(now);
        stored.updated_at = Some(now);
        stored.refresh_totals();

        self.records.write().await.insert(0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, patch: &ExpensePatch) -> Result<Expense> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        let stored = records
            .iter_mut()
            .find(|expense| expense.id.as_deref() == Some(id))
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;
        stored.apply_patch(patch);
        stored.updated_at = Some(Utc::now());
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|expense| expense.id.as_deref() == Some(id))
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;
        records.remove(index);
        Ok(())
    }

    async fn get_with_filters(&self, criteria: &FilterCriteria) -> Result<Vec<Expense>> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(filter::filter_owned(&records, criteria))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::Money;

    use super::*;

    fn draft(city: &str) -> Expense {
        let mut expense = Expense {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            state: "PI".to_string(),
            city: city.to_string(),
            institute: "Estimativa".to_string(),
            closed_value: Money::new(100_000),
            ..Expense::default()
        };
        expense.costs.fuel = Money::new(25_000);
        expense
    }

    #[tokio::test]
    async fn create_assigns_identity_and_lists_newest_first() {
        let gateway = MemoryGateway::new();
        let first = gateway.create(&draft("Teresina")).await.unwrap();
        let second = gateway.create(&draft("Parnaíba")).await.unwrap();

        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);
        assert!(first.created_at.is_some());
        assert_eq!(first.total_expense, Money::new(25_000));
        assert_eq!(first.profit, Money::new(75_000));

        let all = gateway.get_all().await.unwrap();
        assert_eq!(all, vec![second, first]);
    }

    #[tokio::test]
    async fn missing_ids_are_reported() {
        let gateway = MemoryGateway::new();
        assert_eq!(gateway.get_by_id("nope").await.unwrap(), None);
        assert!(matches!(
            gateway.delete("nope").await,
            Err(GatewayError::NotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            gateway.update("nope", &ExpensePatch::default()).await,
            Err(GatewayError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_and_delete_touch_one_record() {
        let gateway = MemoryGateway::new();
        let kept = gateway.create(&draft("Teresina")).await.unwrap();
        let changed = gateway.create(&draft("Parnaíba")).await.unwrap();
        let id = changed.id.clone().unwrap();

        let patch = ExpensePatch {
            institute: Some("Portal R10".to_string()),
            ..ExpensePatch::default()
        };
        let updated = gateway.update(&id, &patch).await.unwrap();
        assert_eq!(updated.institute, "Portal R10");

        gateway.delete(&id).await.unwrap();
        assert_eq!(gateway.get_all().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn filters_apply_in_process() {
        let gateway = MemoryGateway::new();
        gateway.create(&draft("Teresina")).await.unwrap();
        gateway.create(&draft("Parnaíba")).await.unwrap();

        let criteria = FilterCriteria::from_selectors("PI", "Teresina", "all", "all");
        let found = gateway.get_with_filters(&criteria).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].city, "Teresina");
    }

    #[tokio::test]
    async fn offline_gateway_fails_every_call() {
        let gateway = MemoryGateway::new();
        gateway.set_offline(true);
        let err = gateway.get_all().await.unwrap_err();
        assert!(err.is_transient());

        gateway.set_offline(false);
        assert!(gateway.get_all().await.unwrap().is_empty());
    }
}
