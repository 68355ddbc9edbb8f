use crate::utils::error::{DistanceError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DistanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// API keys travel as a query parameter, so anything that is not a visible
/// ASCII character is rejected up front. The value itself is never echoed.
pub fn validate_api_key(field_name: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(DistanceError::ConfigError {
            message: format!("{} is required but was empty", field_name),
        });
    }

    if !key.chars().all(|c| c.is_ascii_graphic()) {
        return Err(DistanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "<redacted>".to_string(),
            reason: "API key may only contain visible ASCII characters".to_string(),
        });
    }

    Ok(())
}
