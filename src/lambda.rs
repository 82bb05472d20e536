use crate::config::FUNCTION_NAME;
use crate::handler::{InvocationResult, RequestHandler};
use lambda_runtime::{service_fn, Error, LambdaEvent, Service};
use serde_json::Value;
use std::future::{ready, Ready};

/// Handles one event from the Runtime API. Payload and context are not used.
pub fn invoke(handler: &RequestHandler<'_>, event: LambdaEvent<Value>) -> InvocationResult {
    log::debug!(
        "{} invocation {}",
        FUNCTION_NAME,
        event.context.request_id
    );
    handler.handle()
}

/// The handler as the service the runtime polls for each event.
pub fn service<'a>(
    handler: RequestHandler<'a>,
) -> impl Service<
    LambdaEvent<Value>,
    Response = InvocationResult,
    Error = Error,
    Future = Ready<Result<InvocationResult, Error>>,
> + 'a {
    service_fn(move |event: LambdaEvent<Value>| {
        ready(Ok::<InvocationResult, Error>(invoke(&handler, event)))
    })
}

/// Serves invocations until the Runtime API goes away.
pub async fn run(handler: RequestHandler<'static>) -> Result<(), Error> {
    lambda_runtime::run(service(handler)).await
}
