//! Top-level facade crate for tallyd.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use tallyd_core::*;
}

pub mod server {
    pub use tallyd_server::*;
}
