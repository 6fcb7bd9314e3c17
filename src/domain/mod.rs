// Domain layer: value objects, the person model and ports. No I/O here.

pub mod address;
pub mod model;
pub mod ports;
