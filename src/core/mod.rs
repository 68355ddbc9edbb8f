pub mod event;
pub mod handler;

pub use crate::domain::model::{DistanceRequest, DistanceResponse};
pub use crate::domain::ports::DistanceMatrix;
pub use crate::utils::error::Result;
