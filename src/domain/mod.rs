// Domain layer: the vacancy record and the ports the core depends on.

pub mod model;
pub mod ports;
