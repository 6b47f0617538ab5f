//! HTTP API modules

pub mod attendance;
pub mod health;
