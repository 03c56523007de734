use std::fmt::Write;
use std::env::VarError;
use config::ConfigError;
use serde::{Deserialize, Serialize};
use super::errors::{self, InternalError};
use crate::{routes::admin::tracer::prelude::*, store::StoreKind};

///
/// The service configuration - initialised at start-up.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Configuration {
    pub port: u16,                         // The port to run this service on.
    pub base_url: String,                  // The root url to host endpoints on.
    pub store: StoreKind,                  // Where customer records live - mongo or memory.
    pub db_name: String,                   // The MongoDB name to use.
    pub mongo_uri: String,                 // The MongoDB connection URI. If a credentials file is used, $USERNAME, $PASSWORD should be used in the uri as placeholders.
    pub mongo_credentials: Option<String>, // The path to the credentials file for MongoDB - None means use URI as-is.
    pub keep_alive: Option<u64>,           // Allow client connections to be re-used for n seconds. None or 0 disables.
    pub client_timeout: u64,               // Timeout (seconds) for a client to send its request head.
    pub redact_error_messages: bool,       // If true, any 4xx responses to clients will only have a code and no descriptive message.
}

impl Configuration {
    ///
    /// Load the service's configuration.
    ///
    pub fn from_env() -> Result<Configuration, ConfigError> {
        let config: Configuration = config::Config::builder()
            // Set defaults for settings that were not specified.
            .set_default("base_url", "")?
            .set_default("client_timeout", 30)?
            .set_default("db_name", "customers_db")?
            .set_default("keep_alive", 15)?
            .set_default("mongo_uri", "mongodb://localhost:27017")?
            .set_default("port", 1323)?
            .set_default("redact_error_messages", false)?
            .set_default("store", "mongo")?

            // Merge any environment variables with the same name as the struct fields.
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        *errors::REDACT_ERROR_MESSAGES.write() = config.redact_error_messages;

        Ok(config)
    }

    ///
    /// Pretty-print the config with ansi colours.
    ///
    pub fn fmt_console(&self) -> Result<String, InternalError> {
        // Serialise to JSON so we have fields to iterate.
        let values = serde_json::to_value(self)?;

        let values = match values.as_object() {
            Some(values) => values,
            None => return Err(InternalError::InvalidJsonError { cause: String::from("No config props") }),
        };

        // Sort by keys.
        let mut sorted: Vec<_> = values.iter().collect();
        sorted.sort_by_key(|a| a.0);

        let mut output = String::new();
        for (k, v) in sorted {
            writeln!(&mut output, "{:>23}{} {}", k, *COLON, v)?;
        }

        Ok(output)
    }
}

///
/// If the specified environment variable is not set for this process, set it to the default value specified.
///
pub fn default_env(key: &str, value: &str) {
    if let Err(VarError::NotPresent) = std::env::var(key) {
        std::env::set_var(key, value);
    }
}
