use std::{fmt, sync::Arc};
use futures::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use crate::{store::CustomerStore, utils::{config::Configuration, errors::InternalError}};

///
/// Built once at start-up and shared (behind an Arc) by every actix worker.
///
/// Holds the long-lived customer store handle and the service configuration.
///
pub struct InitialisationContext {
    store: Arc<dyn CustomerStore>,
    config: Configuration,
}

impl InitialisationContext {
    pub fn new(store: Arc<dyn CustomerStore>, config: Configuration) -> Self {
        InitialisationContext { store, config }
    }

    pub fn store(&self) -> &Arc<dyn CustomerStore> {
        &self.store
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

///
/// A per-request view of the InitialisationContext plus the request's correlation id.
///
/// The request_id middleware creates one of these for each request and stashes it in the request
/// extensions - from there it can be used as an extractor parameter on any HTTP handler.
///
#[derive(Clone)]
pub struct RequestContext {
    init: Arc<InitialisationContext>,
    request_id: String,
}

impl RequestContext {
    pub fn from(init: Arc<InitialisationContext>, request_id: String) -> Self {
        RequestContext { init, request_id }
    }

    pub fn store(&self) -> &dyn CustomerStore {
        self.init.store().as_ref()
    }

    pub fn config(&self) -> &Configuration {
        self.init.config()
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("request_id", &self.request_id)
            .finish()
    }
}

impl FromRequest for RequestContext {
    type Error = InternalError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<RequestContext>() {
            Some(ctx) => ready(Ok(ctx.clone())),
            None => ready(Err(InternalError::MissingRequestContext)),
        }
    }
}
