//! tallyd server library entry.
//!
//! Wires the config, shared state, router, and ingestion handler into the
//! HTTP server stack. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod ingest;
pub mod router;
