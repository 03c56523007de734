use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use crate::{model::{customer::Customer, customer_id::CustomerId}, utils::{context::RequestContext, errors::InternalError}};

///
/// Http handler for getting a customer.
///
#[tracing::instrument(name="get_customer", level="info")]
pub async fn handle(id: CustomerId, ctx: RequestContext)
    -> Result<HttpResponse, InternalError> {

    match get_customer(&id, &ctx).await? {
        Some(customer) => Ok(HttpResponseBuilder::new(StatusCode::OK).json(customer)),
        None => Err(InternalError::CustomerNotFound { id: id.to_string() })
    }
}

///
/// Return the specified customer.
///
pub async fn get_customer(id: &CustomerId, ctx: &RequestContext)
    -> Result<Option<Customer>, InternalError> {

    ctx.store().find_one(id).await
}
