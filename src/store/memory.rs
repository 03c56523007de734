use parking_lot::RwLock;
use async_trait::async_trait;
use super::CustomerStore;
use crate::{model::{customer::{Customer, NewCustomer}, customer_id::CustomerId}, utils::errors::InternalError};

///
/// Customers held in process memory in insertion order. Nothing survives a restart.
///
/// Used by the tests and for running the service locally without a database.
///
#[derive(Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    fn name(&self) -> &'static str {
        "Memory"
    }

    async fn insert(&self, customer: NewCustomer) -> Result<CustomerId, InternalError> {
        let id = CustomerId::new();
        self.customers.write().push(Customer::from_parts(id, customer));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, InternalError> {
        Ok(self.customers.read().clone())
    }

    async fn find_one(&self, id: &CustomerId) -> Result<Option<Customer>, InternalError> {
        Ok(self.customers.read().iter().find(|customer| customer.id == *id).cloned())
    }

    async fn replace(&self, id: &CustomerId, customer: NewCustomer) -> Result<u64, InternalError> {
        let mut lock = self.customers.write();
        match lock.iter_mut().find(|existing| existing.id == *id) {
            Some(existing) => {
                *existing = Customer::from_parts(*id, customer);
                Ok(1)
            },
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &CustomerId) -> Result<u64, InternalError> {
        let mut lock = self.customers.write();
        let before = lock.len();
        lock.retain(|customer| customer.id != *id);
        Ok((before - lock.len()) as u64)
    }

    async fn ping(&self) -> Result<(), InternalError> {
        Ok(())
    }
}
