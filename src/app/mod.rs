//! Application core: port traits, outbound events, and the per-cycle
//! service that orchestrates input classification and reconciliation.

pub mod events;
pub mod ports;
pub mod service;
