use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use crate::utils::{context::RequestContext, errors::InternalError};

///
/// Allow support staff to view the current configuration of the system.
///
pub async fn handle(ctx: RequestContext) -> Result<HttpResponse, InternalError> {
    Ok(HttpResponseBuilder::new(StatusCode::OK).json(ctx.config()))
}
