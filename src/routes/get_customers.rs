use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use crate::{model::customer::Customer, utils::{context::RequestContext, errors::InternalError}};

///
/// Http handler for getting every customer.
///
#[tracing::instrument(name="get_customers", skip(ctx), level="info")]
pub async fn handle(ctx: RequestContext) -> Result<HttpResponse, InternalError> {

    Ok(HttpResponseBuilder::new(StatusCode::OK)
        .json(get_customers(&ctx).await?))
}

pub async fn get_customers(ctx: &RequestContext) -> Result<Vec<Customer>, InternalError> {
    ctx.store().find_all().await // In a real system we'd paginate and limit.
}
