// Domain layer: request/response models and the distance-matrix port.

pub mod model;
pub mod ports;
