use json_api_lambda_types::{InvocationEvent, InvocationResponse, ResponseBody, CONTENT_TYPE, MESSAGE};
use lambda_runtime::{Error, LambdaEvent};
use std::collections::HashMap;
use tracing::debug;

/// Entry point registered with the runtime.
pub(crate) async fn my_handler(event: LambdaEvent<InvocationEvent>) -> Result<InvocationResponse, Error> {
    let (event, ctx) = event.into_parts();
    debug!("Request ID: {}", ctx.request_id);

    Ok(respond(&event)?)
}

/// Builds the response for a single invocation.
/// Never fails on missing fields: an absent `rawPath` or a broken
/// `requestContext.http.method` chain only drops that member from the body.
pub(crate) fn respond(event: &InvocationEvent) -> Result<InvocationResponse, serde_json::Error> {
    let body = ResponseBody {
        message: MESSAGE,
        path: event.raw_path(),
        method: event.method(),
    };

    Ok(InvocationResponse {
        status_code: 200,
        headers: HashMap::from([("Content-Type".to_string(), CONTENT_TYPE.to_string())]),
        body: serde_json::to_string(&body)?,
    })
}
