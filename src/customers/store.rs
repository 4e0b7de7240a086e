//! In-memory customer collection.
//!
//! # Design Decisions
//! - The collection is only reachable through `CustomerStore` methods
//! - Reads take the shared lock, every mutation takes the exclusive lock
//!   for its whole read-modify-write sequence
//! - Uniqueness is checked in the same critical section as the append
//! - Lookups are linear scans; first match wins

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::customers::model::{seed_customers, Customer, CustomerId, CustomerUpdate};
use crate::observability::metrics;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("Customer with ID {0} not found")]
    NotFound(CustomerId),

    /// A record with this id already exists.
    #[error("Customer with ID {0} already exists")]
    DuplicateId(CustomerId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle to the process-wide customer collection.
#[derive(Debug, Clone, Default)]
pub struct CustomerStore {
    inner: Arc<RwLock<Vec<Customer>>>,
}

impl CustomerStore {
    /// Create a store holding `customers` in the given order.
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(customers)),
        }
    }

    /// Create a store holding the startup seed list.
    pub fn seeded() -> Self {
        Self::new(seed_customers())
    }

    /// Snapshot of the whole collection in storage order.
    pub async fn list(&self) -> Vec<Customer> {
        self.inner.read().await.clone()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: CustomerId) -> StoreResult<Customer> {
        self.inner
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new record, returning the updated collection.
    pub async fn create(&self, customer: Customer) -> StoreResult<Vec<Customer>> {
        let mut customers = self.inner.write().await;

        if customers.iter().any(|c| c.id == customer.id) {
            return Err(StoreError::DuplicateId(customer.id));
        }

        tracing::info!(customer_id = customer.id, "Customer created");
        customers.push(customer);
        metrics::record_collection_size(customers.len());

        Ok(customers.clone())
    }

    /// Overwrite the updatable fields of a record, returning the result.
    pub async fn update(&self, id: CustomerId, update: CustomerUpdate) -> StoreResult<Customer> {
        let mut customers = self.inner.write().await;

        let existing = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        existing.apply(update);

        tracing::info!(customer_id = id, "Customer updated");
        Ok(existing.clone())
    }

    /// Remove a record, returning the remaining collection.
    pub async fn delete(&self, id: CustomerId) -> StoreResult<Vec<Customer>> {
        let mut customers = self.inner.write().await;

        let index = customers
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        customers.remove(index);

        tracing::info!(customer_id = id, remaining = customers.len(), "Customer deleted");
        metrics::record_collection_size(customers.len());

        Ok(customers.clone())
    }
}
