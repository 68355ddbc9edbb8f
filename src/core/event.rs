pub use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use query_map::QueryMap;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use std::collections::HashMap;

/// Gateway event carrying only `?origin=<origin>`.
pub fn request_with_origin(origin: impl Into<String>) -> ApiGatewayProxyRequest {
    let mut params = HashMap::new();
    params.insert("origin".to_string(), vec![origin.into()]);

    ApiGatewayProxyRequest {
        query_string_parameters: QueryMap::from(params),
        ..Default::default()
    }
}

/// Absent means empty; no other validation happens here.
pub fn origin(request: &ApiGatewayProxyRequest) -> &str {
    request
        .query_string_parameters
        .first("origin")
        .unwrap_or_default()
}

pub fn json_response(status: StatusCode, body: String) -> ApiGatewayProxyResponse {
    response(status, HeaderValue::from_static("application/json"), body)
}

/// Plain-text response whose body is just the status reason, e.g. `Not Found`.
pub fn status_response(status: StatusCode) -> ApiGatewayProxyResponse {
    let reason = status.canonical_reason().unwrap_or_default();
    response(
        status,
        HeaderValue::from_static("text/plain; charset=utf-8"),
        reason.to_string(),
    )
}

pub fn body_text(response: &ApiGatewayProxyResponse) -> &str {
    match &response.body {
        Some(Body::Text(text)) => text.as_str(),
        _ => "",
    }
}

fn response(status: StatusCode, content_type: HeaderValue, body: String) -> ApiGatewayProxyResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, content_type);

    ApiGatewayProxyResponse {
        status_code: i64::from(status.as_u16()),
        headers,
        body: Some(Body::Text(body)),
        ..Default::default()
    }
}
