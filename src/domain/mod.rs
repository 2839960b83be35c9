// Domain layer: models, the fetch wrapper and ports. No I/O here.

pub mod fetch_result;
pub mod model;
pub mod ports;
