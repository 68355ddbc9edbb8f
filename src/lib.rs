pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::GoogleMapsClient;
pub use crate::config::{DistanceConfig, DEFAULT_DESTINATION};
pub use crate::core::event::{
    body_text, request_with_origin, ApiGatewayProxyRequest, ApiGatewayProxyResponse,
};
pub use crate::core::handler::{handle_request, DistanceHandler};
pub use crate::utils::error::{DistanceError, Result};
