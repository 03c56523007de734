use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode, web::Json};
use crate::{model::{customer::NewCustomer, customer_id::CustomerId}, utils::{context::RequestContext, errors::InternalError}};

///
/// Http handler for creating a customer.
///
#[tracing::instrument(name="create_customer", skip(customer), level="info")]
pub async fn handle(customer: Json<NewCustomer>, ctx: RequestContext) -> Result<HttpResponse, InternalError> {

    let id = create_customer(customer.into_inner(), &ctx).await?;

    // The body is just the new id as a JSON string.
    Ok(HttpResponseBuilder::new(StatusCode::CREATED).json(id))
}

///
/// Insert the customer, returning the id it was given.
///
pub async fn create_customer(customer: NewCustomer, ctx: &RequestContext) -> Result<CustomerId, InternalError> {
    ctx.store().insert(customer).await
}
