use crate::adapters::GoogleMapsClient;
use crate::config::DistanceConfig;
use crate::core::event::{
    json_response, origin, status_response, ApiGatewayProxyRequest, ApiGatewayProxyResponse,
};
use crate::core::{DistanceMatrix, DistanceRequest, DistanceResponse};
use crate::utils::error::{DistanceError, ErrorCategory, Result};
use reqwest::{Client, StatusCode};

/// Turns one gateway request into one gateway response using `M` for the lookup.
pub struct DistanceHandler<M: DistanceMatrix> {
    matrix: M,
    destination: String,
}

impl<M: DistanceMatrix> DistanceHandler<M> {
    pub fn new(matrix: M, destination: impl Into<String>) -> Self {
        Self {
            matrix,
            destination: destination.into(),
        }
    }

    pub async fn respond(&self, request: &ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        match self.lookup(origin(request)).await {
            Ok(body) => json_response(StatusCode::OK, body),
            Err(e) => error_response(&e),
        }
    }

    async fn lookup(&self, origin: &str) -> Result<String> {
        let request = DistanceRequest::new(origin, self.destination.as_str());
        let distance = self.matrix.distance(&request).await?;

        let body = serde_json::to_string(&DistanceResponse::ok(distance))?;
        Ok(body)
    }
}

/// Full invocation: build the maps client from `config`, then answer `request`.
pub async fn handle_request(
    config: &DistanceConfig,
    client: &Client,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    let maps = match GoogleMapsClient::new(config, client.clone()) {
        Ok(maps) => maps,
        Err(e) => return error_response(&e),
    };

    DistanceHandler::new(maps, config.destination.as_str())
        .respond(request)
        .await
}

fn error_response(error: &DistanceError) -> ApiGatewayProxyResponse {
    match error.category() {
        ErrorCategory::Upstream => {
            tracing::warn!(error = %error, "Distance lookup failed");
        }
        ErrorCategory::Configuration | ErrorCategory::Serialization => {
            tracing::error!(error = ?error, category = ?error.category(), "❌ {}", error);
        }
    }

    status_response(error.status_code())
}
