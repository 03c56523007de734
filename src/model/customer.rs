use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use crate::utils::errors::InternalError;
use super::customer_id::CustomerId;

pub mod prelude {
    // Collection name
    pub const CUSTOMERS: &str = "customers";

    // Customer fields.
    pub const ID: &str = "_id";
}

///
/// The API schema for POSTing a new Customer or PUTting a replacement.
///
/// Any id in the body is ignored, as are any other unknown fields. Missing or null fields
/// become empty strings.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCustomer {
    #[serde(deserialize_with = "nullable_string")]
    pub first_name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub last_name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub address: String,
    #[serde(deserialize_with = "nullable_string")]
    pub phone: String,
    #[serde(deserialize_with = "nullable_string")]
    pub email: String,
}

///
/// This is the public schema for retrieving a Customer. Every field is always present.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    pub fn from_parts(id: CustomerId, details: NewCustomer) -> Self {
        Customer {
            id,
            first_name: details.first_name,
            last_name: details.last_name,
            address: details.address,
            phone: details.phone,
            email: details.email,
        }
    }
}

///
/// How a customer is stored in MongoDB.
///
/// The names are only written when non-empty, and the last name lives under 'lastname' - both
/// match the documents already in the customers collection.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CustomerDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(rename = "firstName", default, deserialize_with = "nullable_string", skip_serializing_if = "String::is_empty")]
    pub first_name: String,

    #[serde(rename = "lastname", default, deserialize_with = "nullable_string", skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
}

impl From<NewCustomer> for CustomerDocument {
    fn from(customer: NewCustomer) -> Self {
        CustomerDocument {
            id: None, // Assigned on insert, immutable on replace.
            first_name: customer.first_name,
            last_name: customer.last_name,
            address: customer.address,
            phone: customer.phone,
            email: customer.email,
        }
    }
}

impl TryFrom<CustomerDocument> for Customer {
    type Error = InternalError;

    fn try_from(doc: CustomerDocument) -> Result<Self, Self::Error> {
        let id = doc.id.ok_or(InternalError::InvalidBsonError { cause: String::from("customer document has no _id") })?;

        Ok(Customer {
            id: CustomerId::from(id),
            first_name: doc.first_name,
            last_name: doc.last_name,
            address: doc.address,
            phone: doc.phone,
            email: doc.email,
        })
    }
}

///
/// Treat a null the same as a missing field.
///
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_payload_ignores_id_and_unknown_fields() {
        let customer: NewCustomer = serde_json::from_value(json!({
            "id": "507f1f77bcf86cd799439011",
            "firstName": "Ada",
            "favouriteColour": "green"
        })).unwrap();

        assert_eq!(customer, NewCustomer { first_name: "Ada".into(), ..NewCustomer::default() });
    }

    #[test]
    fn test_payload_nulls_become_empty() {
        let customer: NewCustomer = serde_json::from_value(json!({
            "firstName": null,
            "email": "a@x.com"
        })).unwrap();

        assert_eq!(customer.first_name, "");
        assert_eq!(customer.email, "a@x.com");
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        assert!(serde_json::from_value::<NewCustomer>(json!({ "phone": 123 })).is_err());
    }

    #[test]
    fn test_document_omits_empty_names_and_uses_lastname_key() {
        let document = CustomerDocument::from(NewCustomer {
            last_name: "Lovelace".into(),
            ..NewCustomer::default()
        });

        assert_eq!(bson::to_document(&document).unwrap(), doc! {
            "lastname": "Lovelace",
            "address": "",
            "phone": "",
            "email": ""
        });
    }

    #[test]
    fn test_document_with_missing_fields_reads_as_empty() {
        let oid = ObjectId::new();
        let document: CustomerDocument = bson::from_document(doc! { "_id": oid, "firstName": "Ada" }).unwrap();
        let customer = Customer::try_from(document).unwrap();

        assert_eq!(customer.id, CustomerId::from(oid));
        assert_eq!(customer.first_name, "Ada");
        assert_eq!(customer.last_name, "");
        assert_eq!(customer.email, "");
    }

    #[test]
    fn test_document_with_null_fields_reads_as_empty() {
        let oid = ObjectId::new();
        let document: CustomerDocument = bson::from_document(doc! {
            "_id": oid,
            "firstName": "Ada",
            "lastname": null,
            "address": null,
            "phone": null,
            "email": "a@x.com"
        }).unwrap();
        let customer = Customer::try_from(document).unwrap();

        assert_eq!(customer.last_name, "");
        assert_eq!(customer.address, "");
        assert_eq!(customer.phone, "");
        assert_eq!(customer.email, "a@x.com");
    }

    #[test]
    fn test_customer_json_always_has_every_field() {
        let id: CustomerId = "507f1f77bcf86cd799439011".parse().unwrap();
        let customer = Customer::from_parts(id, NewCustomer::default());

        assert_eq!(serde_json::to_value(&customer).unwrap(), json!({
            "id": "507f1f77bcf86cd799439011",
            "firstName": "",
            "lastName": "",
            "address": "",
            "phone": "",
            "email": ""
        }));
    }
}
