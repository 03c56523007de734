use uuid::Uuid;
use std::sync::Arc;
use tracing::trace;
use actix_web::{Error, HttpMessage};
use futures::future::{ok, LocalBoxFuture, Ready};
use actix_service::{forward_ready, Service, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{dev::ServiceRequest, dev::ServiceResponse};
use crate::utils::context::{InitialisationContext, RequestContext};


/// The header set by the middleware
pub const REQUEST_ID_HEADER: &str = "x-correlation-id";

/// Request ID wrapper.
pub struct Middleware {
    ctx: Arc<InitialisationContext>
}

impl Middleware {
    pub fn new(ctx: Arc<InitialisationContext>) -> Self {
        Middleware { ctx }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Middleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIDMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequestIDMiddleware { service, ctx: self.ctx.clone() })
    }
}

/// Actual actix-web middleware
pub struct RequestIDMiddleware<S> {
    service: S,
    ctx: Arc<InitialisationContext>
}

impl<S, B> Service<ServiceRequest> for RequestIDMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let request_id = ensure_request_has_id(&mut req);

        // Create a RequestContext extractor for the request.
        req.extensions_mut().insert(RequestContext::from(self.ctx.clone(), request_id.clone()));

        // propagate the call
        let fut = self.service.call(req);

        // Ensure the response has the request-id in it.
        Box::pin(async move {
            let mut res = fut.await?;

            match HeaderValue::from_str(&request_id) {
                Ok(value) => {
                    res.headers_mut().insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                },
                Err(err) => trace!("Unable to set header value for request_id {} : {}", request_id, err),
            };

            Ok(res)
        })
    }
}

fn ensure_request_has_id(req: &mut ServiceRequest) -> String {
    // Get any existing request id from the caller. If it's not a valid header value (unicode rubbish)
    // then we'll discard it.
    let request_id = match req.headers().get(REQUEST_ID_HEADER) {
        Some(header_value) => {
            match header_value.to_str() {
                Ok(value) if !value.is_empty() => Some(value.to_string()),
                Ok(_) => None,
                Err(err) => {
                    trace!("Request X-Correlation-ID {:?} was not a valid value it will be replaced: {}", header_value, err);
                    None
                }
            }
        },
        None => None,
    };

    // If there's a valid, existing request_id that's what we'll use, otherwise we'll generate one
    // and use that.
    match request_id {
        Some(request_id) => request_id,
        None => {
            // Generate and set the header - replace any existing.
            let request_id = Uuid::new_v4().to_string();

            match HeaderValue::from_str(&request_id) {
                Ok(header_value) => {
                    req.headers_mut().insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);
                },
                Err(err) => trace!("Unable to put generated request_id {} into a HeaderValue: {}", request_id, err),
            };

            request_id
        }
    }
}
