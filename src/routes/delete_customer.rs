use tracing::debug;
use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use crate::{model::customer_id::CustomerId, utils::{context::RequestContext, errors::InternalError}};

///
/// Http handler for deleting a customer.
///
/// Always 204 with no body, whether or not there was a customer to remove. A 204 can't carry a
/// body without corrupting the next response on a kept-alive connection.
///
#[tracing::instrument(name="delete_customer", level="info")]
pub async fn handle(id: CustomerId, ctx: RequestContext)
    -> Result<HttpResponse, InternalError> {

    let outcome = match delete_customer(&id, &ctx).await? {
        true  => "ok",
        false => "no",
    };

    debug!("Delete customer {}: {}", id, outcome);

    Ok(HttpResponseBuilder::new(StatusCode::NO_CONTENT).finish())
}

///
/// Remove the customer, returning true if there was one to remove.
///
pub async fn delete_customer(id: &CustomerId, ctx: &RequestContext) -> Result<bool, InternalError> {
    Ok(ctx.store().delete(id).await? > 0)
}
