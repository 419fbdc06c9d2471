// Domain layer: the device model and the ports the shell talks through.

pub mod model;
pub mod ports;
