// Domain layer: models, ports (interfaces) and the field parsing services.

pub mod model;
pub mod ports;
pub mod services;
