// Domain layer: race entities and the ports the rest of the crate talks through.

pub mod model;
pub mod ports;
