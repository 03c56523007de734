pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::{model::{customer::{Customer, NewCustomer}, customer_id::CustomerId}, utils::errors::InternalError};

pub use memory::InMemoryCustomerStore;
pub use mongo::MongoCustomerStore;

///
/// Which CustomerStore implementation the service runs against.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Mongo,
    Memory,
}

///
/// The customer collection. Every method is a single call against the underlying store.
///
#[async_trait]
pub trait CustomerStore: Send + Sync {
    ///
    /// A short name for logs and the health endpoint.
    ///
    fn name(&self) -> &'static str;

    ///
    /// Insert a new customer, returning the id the store assigned it.
    ///
    async fn insert(&self, customer: NewCustomer) -> Result<CustomerId, InternalError>;

    ///
    /// Every customer, in the store's natural order.
    ///
    async fn find_all(&self) -> Result<Vec<Customer>, InternalError>;

    async fn find_one(&self, id: &CustomerId) -> Result<Option<Customer>, InternalError>;

    ///
    /// Overwrite the whole customer. Returns the number of customers matched (0 or 1) - a
    /// missing customer is not created.
    ///
    async fn replace(&self, id: &CustomerId, customer: NewCustomer) -> Result<u64, InternalError>;

    ///
    /// Returns the number of customers removed (0 or 1).
    ///
    async fn delete(&self, id: &CustomerId) -> Result<u64, InternalError>;

    async fn ping(&self) -> Result<(), InternalError>;

    ///
    /// Release any connections. Called once the HTTP server has stopped.
    ///
    async fn shutdown(&self) {}
}
