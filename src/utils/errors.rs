use tracing::error;
use serde_json::json;
use parking_lot::RwLock;
use config::ConfigError;
use lazy_static::lazy_static;
use derive_more::{Display, Error};
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, error::JsonPayloadError, http::StatusCode, web::JsonConfig};
use mongodb::bson;

lazy_static! {
    // In general configuration should be passed in a context struct via Actix extractors.
    // Any configuration in a lazy static block exists because there are sections of code where
    // the contexts cannot be accessed. For example, actix error responders and extractor configs.

    /// When a 4xx response is returned to the client, a useful error message will be sent.
    /// In production this can expose more than we'd like, so this setting is used to redact them.
    pub static ref REDACT_ERROR_MESSAGES: RwLock<bool> = RwLock::new(false);
}

///
/// An error type used throughout the services code which can be converted into a HTTP error response.
///
/// All possible library or system errors are converted into one of these InternalErrors so our code
/// can have a clean Result<blah, InternalError> signature declaration and avoids excessive use of
/// operation.await.map_err(|err| blah) type calls.
///
/// Conversion from a source error to an InternalError is done further below with a series of From<T>
/// trait implementations.
///
#[derive(Clone, Debug, Display, Error)]
pub enum InternalError {
    #[display(fmt = "Unable to read credentials: {}", cause)]
    UnableToReadCredentials{ cause: String },

    #[display(fmt = "The service configuration is not correct: {}", cause)]
    ConfigError{ cause: String },

    #[display(fmt = "MongoDB error: {}", cause)]
    MongoDBError{ cause: String },

    #[display(fmt = "Request format invalid: {}", reason)]
    RequestFormatError{ reason: String },

    #[display(fmt = "Customer id '{}' is not a valid 24 character hex identifier", id)]
    InvalidCustomerId{ id: String },

    #[display(fmt = "Customer {} not found", id)]
    CustomerNotFound{ id: String },

    #[display(fmt = "Unable to convert to bson: {}", cause)]
    InvalidBsonError{ cause: String },

    #[display(fmt = "Unable to convert to json: {}", cause)]
    InvalidJsonError{ cause: String },

    #[display(fmt = "InvalidFormatError: {}", cause)]
    InvalidFormatError{ cause: String },

    #[display(fmt = "No request context was attached to the request")]
    MissingRequestContext,
}

impl InternalError {
    fn error_code(&self) -> u16 {
        match *self {
            InternalError::InvalidFormatError{ cause: _ }      => 0400,
            InternalError::UnableToReadCredentials{ cause: _ } => 0500,
            InternalError::ConfigError{ cause: _ }             => 0501,
            InternalError::MissingRequestContext               => 0502,
            InternalError::RequestFormatError { reason: _ }    => 1010,
            InternalError::InvalidCustomerId { id: _ }         => 1011,
            InternalError::MongoDBError { cause: _ }           => 2001,
            InternalError::InvalidBsonError { cause: _ }       => 2006,
            InternalError::InvalidJsonError { cause: _ }       => 2105,
            InternalError::CustomerNotFound { id: _ }          => 2509,
        }
    }

    ///
    /// Only client errors (4xx) can return an error message field.
    /// It is then controlled via the global redaction flag.
    ///
    fn redact_message(&self) -> bool {
        if !self.status_code().is_client_error() {
            return true
        }
        *REDACT_ERROR_MESSAGES.read()
    }
}

impl ResponseError for InternalError {
    fn status_code(&self) -> StatusCode {
        match *self {
            InternalError::InvalidFormatError{ cause: _ }      => StatusCode::INTERNAL_SERVER_ERROR,
            InternalError::UnableToReadCredentials{ cause: _ } => StatusCode::INTERNAL_SERVER_ERROR,
            InternalError::ConfigError{ cause: _ }             => StatusCode::INTERNAL_SERVER_ERROR,
            InternalError::MissingRequestContext               => StatusCode::INTERNAL_SERVER_ERROR,
            InternalError::RequestFormatError { reason: _ }    => StatusCode::BAD_REQUEST,
            InternalError::InvalidCustomerId { id: _ }         => StatusCode::BAD_REQUEST,
            InternalError::MongoDBError { cause: _ }           => StatusCode::INTERNAL_SERVER_ERROR,
            InternalError::InvalidBsonError { cause: _ }       => StatusCode::INTERNAL_SERVER_ERROR,
            InternalError::InvalidJsonError { cause: _ }       => StatusCode::INTERNAL_SERVER_ERROR,
            InternalError::CustomerNotFound { id: _ }          => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!("{}", self);

        let body = match self.redact_message() {
            true => json!(
                {
                    "errorCode": self.error_code()
                }),
            false => json!(
                {
                    "errorCode": self.error_code(),
                    "message": self.to_string()
                }),
        };

        HttpResponseBuilder::new(self.status_code()).json(body)
    }
}

impl From<mongodb::error::Error> for InternalError {
    fn from(error: mongodb::error::Error) -> Self {
        InternalError::MongoDBError { cause: error.to_string() }
    }
}

impl From<bson::ser::Error> for InternalError {
    fn from(error: bson::ser::Error) -> Self {
        InternalError::InvalidBsonError { cause: error.to_string() }
    }
}

impl From<bson::de::Error> for InternalError {
    fn from(error: bson::de::Error) -> Self {
        InternalError::InvalidBsonError { cause: error.to_string() }
    }
}

impl From<serde_json::Error> for InternalError {
    fn from(error: serde_json::Error) -> Self {
        InternalError::InvalidJsonError { cause: error.to_string() }
    }
}

impl From<ConfigError> for InternalError {
    fn from(error: ConfigError) -> Self {
        InternalError::ConfigError { cause: error.to_string() }
    }
}

impl From<InternalError> for std::io::Error {
    fn from(error: InternalError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
    }
}

impl From<std::fmt::Error> for InternalError {
    fn from(error: std::fmt::Error) -> Self {
        InternalError::InvalidFormatError { cause: error.to_string() }
    }
}

///
/// Return JSON parse details as an error to the client.
///
pub fn configure_json_extractor() -> JsonConfig {
    JsonConfig::default()
        .error_handler(|err, _req| {
            let reason = match &err {
                JsonPayloadError::ContentType => String::from("Content type must be application/json"),
                err => err.to_string(),
            };
            InternalError::RequestFormatError { reason }.into()
        })
}
