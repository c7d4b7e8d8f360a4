// Domain layer: record model, dialog vocabulary and host-facing ports.

pub mod model;
pub mod ports;
