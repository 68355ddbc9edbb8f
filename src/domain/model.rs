use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceRequest {
    pub origin: String,
    pub destination: String,
}

impl DistanceRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Body returned to the caller on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceResponse {
    pub distance: String,
    pub ok: bool,
}

impl DistanceResponse {
    pub fn ok(distance: impl Into<String>) -> Self {
        Self {
            distance: distance.into(),
            ok: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistanceMatrixResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatrixElement {
    #[serde(default)]
    pub status: String,
    pub distance: Option<TextValue>,
}

/// Display text plus the raw value in metres.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: i64,
}

impl DistanceMatrixResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }

    pub fn first_element(&self) -> Option<&MatrixElement> {
        self.rows.first()?.elements.first()
    }

    /// Human-readable distance of the first origin to the first destination,
    /// or an empty string when the matrix has nothing there.
    pub fn first_distance(&self) -> &str {
        self.first_element()
            .and_then(|element| element.distance.as_ref())
            .map(|distance| distance.text.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_two_fields() {
        let body = serde_json::to_value(DistanceResponse::ok("5.2 km")).unwrap();
        assert_eq!(body, serde_json::json!({"distance": "5.2 km", "ok": true}));
    }

    #[test]
    fn test_first_distance_from_api_payload() {
        let payload = serde_json::json!({
            "destination_addresses": ["Birmingham B31 2UQ, UK"],
            "origin_addresses": ["Birmingham B1 1AA, UK"],
            "rows": [{
                "elements": [{
                    "distance": {"text": "9.4 km", "value": 9412},
                    "duration": {"text": "21 mins", "value": 1260},
                    "status": "OK"
                }]
            }],
            "status": "OK"
        });

        let matrix: DistanceMatrixResponse = serde_json::from_value(payload).unwrap();
        assert!(matrix.is_ok());
        assert_eq!(matrix.first_distance(), "9.4 km");
        assert_eq!(matrix.first_element().unwrap().distance.as_ref().unwrap().value, 9412);
    }

    #[test]
    fn test_first_distance_is_empty_when_not_found() {
        let payload = serde_json::json!({
            "destination_addresses": ["Birmingham B31 2UQ, UK"],
            "origin_addresses": [""],
            "rows": [{"elements": [{"status": "NOT_FOUND"}]}],
            "status": "OK"
        });

        let matrix: DistanceMatrixResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(matrix.first_distance(), "");
    }

    #[test]
    fn test_first_distance_with_no_rows() {
        let matrix = DistanceMatrixResponse::default();
        assert!(!matrix.is_ok());
        assert_eq!(matrix.first_distance(), "");
    }
}
