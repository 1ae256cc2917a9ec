//! Persistence of expense records.
//!
//! [`ExpenseGateway`] is the storage seam: [`RestGateway`] talks to a
//! PostgREST endpoint, [`MemoryGateway`] keeps records in process.
use std::future::Future;

use engine::{Expense, ExpensePatch, FilterCriteria};

pub use error::GatewayError;
pub use memory::MemoryGateway;
pub use rest::{RestConfig, RestGateway};

mod error;
pub mod mapping;
mod memory;
mod rest;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// CRUD and filtered listing of expense records.
///
/// Listings are newest first. Records returned by `create` and `update` are
/// the stored versions: id, timestamps and totals come from the backend.
pub trait ExpenseGateway: Send + Sync {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Expense>>> + Send;

    /// `Ok(None)` when no record has `id`.
    fn get_by_id(&self, id: &str) -> impl Future<Output = Result<Option<Expense>>> + Send;

    fn create(&self, expense: &Expense) -> impl Future<Output = Result<Expense>> + Send;

    /// Fails with [`GatewayError::NotFound`] when no record has `id`.
    fn update(
        &self,
        id: &str,
        patch: &ExpensePatch,
    ) -> impl Future<Output = Result<Expense>> + Send;

    /// Fails with [`GatewayError::NotFound`] when no record has `id`.
    fn delete(&self, id: &str) -> impl Future<Output = Result<()>> + Send;

    /// Unset criteria are not sent to the backend.
    fn get_with_filters(
        &self,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<Expense>>> + Send;
}
