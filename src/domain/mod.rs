// Domain layer: lead models, ports, and the pure domain-name services.

pub mod model;
pub mod ports;

pub mod services;
