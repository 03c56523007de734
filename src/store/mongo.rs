use tracing::info;
use futures::TryStreamExt;
use async_trait::async_trait;
use mongodb::{Client, Collection, bson::doc};
use super::CustomerStore;
use crate::{model::{customer::{prelude::*, Customer, CustomerDocument, NewCustomer}, customer_id::CustomerId}, utils::{config::Configuration, errors::InternalError, mongo}};

///
/// Customers held in the 'customers' collection of the configured MongoDB database.
///
pub struct MongoCustomerStore {
    client: Client,
    collection: Collection<CustomerDocument>,
}

impl MongoCustomerStore {
    ///
    /// Connect and ping the deployment - an unreachable database is an error here, not on first use.
    ///
    pub async fn connect(app_name: &str, config: &Configuration) -> Result<Self, InternalError> {
        let client = mongo::get_mongo_client(app_name, config).await?;
        Ok(Self::new(client, &config.db_name))
    }

    pub fn new(client: Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection::<CustomerDocument>(CUSTOMERS);
        MongoCustomerStore { client, collection }
    }
}

#[async_trait]
impl CustomerStore for MongoCustomerStore {
    fn name(&self) -> &'static str {
        "MongoDB"
    }

    async fn insert(&self, customer: NewCustomer) -> Result<CustomerId, InternalError> {
        let result = self.collection.insert_one(CustomerDocument::from(customer), None).await?;

        match result.inserted_id.as_object_id() {
            Some(oid) => Ok(CustomerId::from(oid)),
            None => Err(InternalError::InvalidBsonError { cause: format!("inserted id {} is not an ObjectId", result.inserted_id) }),
        }
    }

    async fn find_all(&self) -> Result<Vec<Customer>, InternalError> {
        let cursor = self.collection.find(doc!{}, None).await?; // Yes this would return ALL customers.
        let documents: Vec<CustomerDocument> = cursor.try_collect().await?;
        documents.into_iter().map(Customer::try_from).collect()
    }

    async fn find_one(&self, id: &CustomerId) -> Result<Option<Customer>, InternalError> {
        match self.collection.find_one(doc! { ID: *id }, None).await? {
            Some(document) => Ok(Some(Customer::try_from(document)?)),
            None => Ok(None),
        }
    }

    async fn replace(&self, id: &CustomerId, customer: NewCustomer) -> Result<u64, InternalError> {
        let result = self.collection.replace_one(
            /* Filter      */ doc! { ID: *id },
            /* Replacement */ CustomerDocument::from(customer),
            /* Options     */ None)
            .await?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: &CustomerId) -> Result<u64, InternalError> {
        let result = self.collection.delete_one(doc! { ID: *id }, None).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), InternalError> {
        mongo::ping(&self.client).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        info!("Disconnecting from MongoDB");
        self.client.clone().shutdown().await;
    }
}
