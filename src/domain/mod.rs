// Domain layer: the profile model and the ports (interfaces) the proxy and subject share.

pub mod model;
pub mod ports;
