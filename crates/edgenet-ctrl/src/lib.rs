//! Control engine for the edge-network emulation platform.
//!
//! The engine owns the single active scenario: its activation lifecycle, the
//! runtime events that mutate the live topology, and the aggregation of
//! cluster-wide component health. Scenario storage, the topology graph itself,
//! the health key-value store and the liveness watchdog are external
//! collaborators reached through the traits in [`stores`].

pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod stores;

pub use config::{CtrlConfig, HttpServerConfig};
pub use engine::{Engine, EventKind, ServiceMapFilter, CORE_PODS};
pub use error::CtrlError;
