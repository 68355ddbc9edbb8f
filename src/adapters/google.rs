use crate::config::{DistanceConfig, TravelMode, Units};
use crate::domain::model::{DistanceMatrixResponse, DistanceRequest};
use crate::domain::ports::DistanceMatrix;
use crate::utils::error::{DistanceError, Result};
use crate::utils::validation::validate_api_key;
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    client: Client,
    endpoint: String,
    api_key: String,
    mode: TravelMode,
    units: Option<Units>,
    language: Option<String>,
}

impl GoogleMapsClient {
    /// Fails when the configured credential cannot be used at all.
    /// `client` is expected to be shared across invocations.
    pub fn new(config: &DistanceConfig, client: Client) -> Result<Self> {
        validate_api_key("GOOGLE_API", &config.api_key)?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint.clone(),
            api_key: config.api_key.clone(),
            mode: config.mode,
            units: config.units,
            language: config.language.clone(),
        })
    }

    fn query<'a>(&'a self, request: &'a DistanceRequest) -> Vec<(&'static str, &'a str)> {
        let mut query = vec![
            ("origins", request.origin.as_str()),
            ("destinations", request.destination.as_str()),
            ("mode", self.mode.as_str()),
        ];
        if let Some(units) = self.units {
            query.push(("units", units.as_str()));
        }
        if let Some(language) = &self.language {
            query.push(("language", language.as_str()));
        }
        query.push(("key", self.api_key.as_str()));
        query
    }

    pub async fn matrix(&self, request: &DistanceRequest) -> Result<DistanceMatrixResponse> {
        // The request URL carries the api key, so it never goes into the error
        let api_error = |source: reqwest::Error| DistanceError::ApiError {
            origin: request.origin.clone(),
            source: source.without_url(),
        };

        tracing::debug!(
            origin = %request.origin,
            destination = %request.destination,
            "Making distance matrix request to: {}",
            self.endpoint
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query(request))
            .send()
            .await
            .map_err(api_error)?;

        tracing::debug!("Distance matrix response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(DistanceError::UpstreamError {
                status: status.to_string(),
                message: format!("could not get response from origin {}", request.origin),
            });
        }

        let matrix: DistanceMatrixResponse = response.json().await.map_err(api_error)?;

        if !matrix.is_ok() {
            return Err(DistanceError::UpstreamError {
                status: matrix.status.clone(),
                message: matrix
                    .error_message
                    .clone()
                    .unwrap_or_else(|| format!("could not get response from origin {}", request.origin)),
            });
        }

        Ok(matrix)
    }
}

#[async_trait]
impl DistanceMatrix for GoogleMapsClient {
    async fn distance(&self, request: &DistanceRequest) -> Result<String> {
        let matrix = self.matrix(request).await?;

        if let Some(element) = matrix.first_element() {
            if element.status != "OK" {
                tracing::debug!(element_status = %element.status, "No route for origin");
            }
        }

        let distance = matrix.first_distance();
        if distance.is_empty() {
            return Err(DistanceError::NoDistance);
        }

        Ok(distance.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_requires_api_key() {
        let config = DistanceConfig::new("");
        let err = GoogleMapsClient::new(&config, Client::new()).unwrap_err();
        assert!(matches!(err, DistanceError::ConfigError { .. }));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_construction_rejects_malformed_key() {
        let config = DistanceConfig::new("bad key\n");
        assert!(GoogleMapsClient::new(&config, Client::new()).is_err());
    }

    #[test]
    fn test_query_parameters() {
        let mut config = DistanceConfig::new("abc123");
        config.units = Some(Units::Imperial);
        config.language = Some("en-GB".to_string());
        let client = GoogleMapsClient::new(&config, Client::new()).unwrap();

        let request = DistanceRequest::new("B1 1AA", "B31 2UQ");
        let query = client.query(&request);

        assert_eq!(
            query,
            vec![
                ("origins", "B1 1AA"),
                ("destinations", "B31 2UQ"),
                ("mode", "driving"),
                ("units", "imperial"),
                ("language", "en-GB"),
                ("key", "abc123"),
            ]
        );
    }
}
