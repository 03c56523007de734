use async_trait::async_trait;
use customers::{model::{customer::{Customer, NewCustomer}, customer_id::CustomerId}, store::CustomerStore, utils::errors::InternalError};

///
/// A customer store whose database has gone away - every call fails.
///
#[allow(dead_code)]
pub struct FailingCustomerStore;

#[allow(dead_code)]
fn unreachable() -> InternalError {
    InternalError::MongoDBError { cause: String::from("No servers available for the operation") }
}

#[async_trait]
impl CustomerStore for FailingCustomerStore {
    fn name(&self) -> &'static str {
        "Failing"
    }

    async fn insert(&self, _customer: NewCustomer) -> Result<CustomerId, InternalError> {
        Err(unreachable())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, InternalError> {
        Err(unreachable())
    }

    async fn find_one(&self, _id: &CustomerId) -> Result<Option<Customer>, InternalError> {
        Err(unreachable())
    }

    async fn replace(&self, _id: &CustomerId, _customer: NewCustomer) -> Result<u64, InternalError> {
        Err(unreachable())
    }

    async fn delete(&self, _id: &CustomerId) -> Result<u64, InternalError> {
        Err(unreachable())
    }

    async fn ping(&self) -> Result<(), InternalError> {
        Err(unreachable())
    }
}
