use serde::Serialize;
use serde_json::json;
use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use crate::utils::{context::RequestContext, errors::InternalError};

#[derive(Serialize)]
struct Health {
    kind: &'static str,
    healthy: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>
}

///
/// Report whether the customer store can be reached. 503 if it can't.
///
pub async fn handle(ctx: RequestContext) -> Result<HttpResponse, InternalError> {
    let store = store_health(&ctx).await;

    let status = match store.healthy {
        true  => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    };

    Ok(HttpResponseBuilder::new(status).json(json!(
        {
            "store": store
        }
    )))
}

async fn store_health(ctx: &RequestContext) -> Health {
    let kind = ctx.store().name();
    match ctx.store().ping().await {
        Err(err) => Health { kind, healthy: false, message: Some(err.to_string()) },
        Ok(_) => Health { kind, healthy: true, message: None }
    }
}
