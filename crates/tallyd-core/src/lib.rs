//! tallyd core: metric store, update validation, and error types.
//!
//! This crate defines the ingestion semantics shared by the server and any
//! future transports: the concurrency-safe [`store::MetricStore`], the
//! kind/value parsing rules, and the error surface. It intentionally carries
//! no transport or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallydError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod store;
pub mod update;

/// Shared result type.
pub use error::{Result, TallydError};
pub use store::MetricStore;
pub use update::apply_update;
