use std::{fmt, str::FromStr};
use futures::future::{ready, Ready};
use mongodb::bson::{Bson, oid::ObjectId};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use crate::utils::errors::InternalError;

///
/// The identity of a customer - a 12-byte ObjectId whose canonical text form is 24 hex characters.
///
/// Handlers parse path parameters into this and only ever see the hex form. The raw bytes stay
/// inside the store implementations.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CustomerId(ObjectId);

impl CustomerId {
    ///
    /// Generate a new, unique id.
    ///
    pub fn new() -> Self {
        CustomerId(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CustomerId {
    type Err = InternalError;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(hex)
            .map(CustomerId)
            .map_err(|_| InternalError::InvalidCustomerId { id: hex.to_string() })
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for CustomerId {
    fn from(oid: ObjectId) -> Self {
        CustomerId(oid)
    }
}

impl From<CustomerId> for Bson {
    fn from(id: CustomerId) -> Self {
        Bson::ObjectId(id.0)
    }
}

///
/// Extract the {id} path segment. Put this ahead of any body parameter so a bad id is reported
/// before a bad body.
///
impl FromRequest for CustomerId {
    type Error = InternalError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(req.match_info().get("id").unwrap_or_default().parse())
    }
}

// Always the hex string on the wire - never the extended-json {"$oid": ...} form.
impl Serialize for CustomerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(de::Error::custom)
    }
}
