use crate::domain::model::DistanceRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can turn one origin/destination pair into a human-readable distance.
#[async_trait]
pub trait DistanceMatrix: Send + Sync {
    async fn distance(&self, request: &DistanceRequest) -> Result<String>;
}
