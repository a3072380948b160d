// Domain layer: transient models and ports (interfaces). No external
// dependencies beyond std.

pub mod model;
pub mod ports;
