#[cfg(feature = "lambda")]
use distance_lambda::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use distance_lambda::{handle_request, ApiGatewayProxyRequest, ApiGatewayProxyResponse, DistanceConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    config: &DistanceConfig,
    client: &reqwest::Client,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let response = handle_request(config, client, &event.payload).await;

    tracing::debug!(
        request_id = %event.context.request_id,
        status = response.status_code,
        "Distance request completed"
    );
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 配置只在冷啟動時讀取一次，之後所有調用共用
    let config = DistanceConfig::from_env()?;
    config.validate()?;
    tracing::info!(destination = %config.destination, mode = %config.mode, "Starting distance Lambda function");

    let client = reqwest::Client::new();
    let config = &config;
    let client = &client;

    run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
        function_handler(config, client, event).await
    }))
    .await
}
