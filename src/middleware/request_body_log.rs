use std::rc::Rc;
use tracing::info;
use itertools::Itertools;
use futures::stream::StreamExt;
use actix_web::web::{Bytes, BytesMut};
use futures::future::{ok, LocalBoxFuture, Ready};
use actix_service::{forward_ready, Service, Transform};
use actix_web::{HttpMessage, dev::ServiceRequest, dev::ServiceResponse, Error};
use crate::routes::admin::tracer::{prelude::*, tracer_on};

///
/// When the tracer is on, log every incoming request - including its body.
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
        ok(LoggingMiddleware {
            service: Rc::new(service),
        })
    }
}

pub struct LoggingMiddleware<S> {
    // This is special: We need this to avoid lifetime issues.
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

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();

        Box::pin(async move {
            if tracer_on() {
                let mut body = BytesMut::new();
                let mut stream = req.take_payload();
                while let Some(chunk) = stream.next().await {
                    body.extend_from_slice(&chunk?);
                }

                let body = body.freeze();

                info!("Request received from {}\n{}{}\n{}{}",
                    req.connection_info().realip_remote_addr().unwrap_or("unknown"),
                    *IN,
                    format_path(&req),
                    format_headers(&req),
                    format_body(&body));

                // Rebuild the request as we've just consumed the stream.
                let (_, mut payload) = actix_http::h1::Payload::create(true);
                payload.unread_data(body);
                req.set_payload(payload.into());
            }

            // Proceed.
            svc.call(req).await
        })
    }
}

fn format_path(req: &ServiceRequest) -> String {
    format!("{} {}", req.method(), req.uri())
}

fn format_headers(req: &ServiceRequest) -> String {
    req.headers().iter()
        .map(|(key, value)| format!("{}{}{} {}", *IN, key, *COLON, value.to_str().unwrap_or("cant read value")))
        .join("\n")
}

fn format_body(body: &Bytes) -> String {
    if body.is_empty() {
        return String::new();
    }

    format!("\n{}", String::from_utf8(body.to_vec()).unwrap_or_else(|_| String::from("cant read body")))
}
