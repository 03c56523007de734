use tracing::debug;
use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode, web::Json};
use crate::{model::{customer::NewCustomer, customer_id::CustomerId}, utils::{context::RequestContext, errors::InternalError}};

///
/// Http handler for replacing a customer.
///
#[tracing::instrument(name="update_customer", skip(customer), level="info")]
pub async fn handle(id: CustomerId, customer: Json<NewCustomer>, ctx: RequestContext)
    -> Result<HttpResponse, InternalError> {

    update_customer(&id, customer.into_inner(), &ctx).await?;

    Ok(HttpResponseBuilder::new(StatusCode::OK).finish())
}

///
/// Replace every field of the customer with those specified. Fields not in the request are
/// cleared rather than kept. If the customer doesn't exist nothing happens.
///
pub async fn update_customer(id: &CustomerId, customer: NewCustomer, ctx: &RequestContext)
    -> Result<(), InternalError> {

    let matched = ctx.store().replace(id, customer).await?;

    if matched == 0 {
        debug!("No customer {} to replace", id);
    }

    Ok(())
}
