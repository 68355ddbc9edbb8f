use super::{DistanceConfig, TravelMode, Units, DEFAULT_API_ENDPOINT, DEFAULT_DESTINATION};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "distance")]
#[command(about = "Look up the driving distance from an origin to the fixed destination")]
pub struct CliConfig {
    /// Starting address, passed through to the distance matrix as-is
    #[arg(long, default_value = "")]
    pub origin: String,

    #[arg(long, env = "GOOGLE_API", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "DISTANCE_DESTINATION", default_value = DEFAULT_DESTINATION)]
    pub destination: String,

    #[arg(long, env = "DISTANCE_MATRIX_ENDPOINT", default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, env = "DISTANCE_MODE", default_value = "driving")]
    pub mode: TravelMode,

    #[arg(long, env = "DISTANCE_UNITS")]
    pub units: Option<Units>,

    #[arg(long, env = "DISTANCE_LANGUAGE")]
    pub language: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl From<&CliConfig> for DistanceConfig {
    fn from(cli: &CliConfig) -> Self {
        Self {
            api_key: cli.api_key.clone(),
            destination: cli.destination.clone(),
            api_endpoint: cli.api_endpoint.clone(),
            mode: cli.mode,
            units: cli.units,
            language: cli.language.clone(),
        }
    }
}
