// Domain layer: fold models and ports. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
