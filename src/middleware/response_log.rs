use std::rc::Rc;
use tracing::info;
use itertools::Itertools;
use futures::future::{ok, LocalBoxFuture, Ready};
use actix_service::{forward_ready, Service, Transform};
use actix_web::{dev::ServiceRequest, dev::ServiceResponse, Error};
use crate::routes::admin::tracer::{colour_status, prelude::*, tracer_on};

///
/// When the tracer is on, log the status and headers of every outgoing response.
///
pub struct Logging;

impl<S: 'static, B> Transform<S, ServiceRequest> for Logging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LoggingMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(LoggingMiddleware { service: Rc::new(service) })
    }
}

pub struct LoggingMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoggingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let remote_addr = req.connection_info().realip_remote_addr().unwrap_or("unknown").to_string();
        let uri = format!("{} {}", req.method(), req.uri());
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            if tracer_on() {
                info!("Response sent to {}\n{}{} {}\n{}",
                    remote_addr,
                    *OUT,
                    uri,
                    colour_status(res.status().as_u16()),
                    format_headers(&res));
            }

            Ok(res)
        })
    }
}

fn format_headers<B>(res: &ServiceResponse<B>) -> String {
    res.headers()
        .iter()
        .map(|(key, value)| format!("{}{}{} {}", *OUT, key, *COLON, value.to_str().unwrap_or("cant read value")))
        .join("\n")
}
