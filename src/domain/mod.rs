// Domain layer: content model and ports. Only serde beyond std.

pub mod model;
pub mod ports;
