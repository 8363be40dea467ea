#[cfg(feature = "lambda")]
use dog_breeds::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use dog_breeds::{BreedListHandler, HandlerResponse, HttpBreedSource, LambdaConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &BreedListHandler<HttpBreedSource>,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Listing dog breeds");

    // 失敗一律包成 ErrorResult 回傳，不交給 runtime
    let response = handler.handle().await;

    tracing::info!(
        request_id = %event.context.request_id,
        status_code = response.status_code(),
        "Dog breeds invocation finished"
    );
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時建立一次，之後的呼叫共用連線池
    let config = LambdaConfig::from_env()?;
    config.validate()?;
    tracing::info!(
        endpoint = %config.api_endpoint,
        timeout_ms = config.timeout_ms,
        "Starting dog breeds Lambda function"
    );

    let handler = BreedListHandler::from_config(&config);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
