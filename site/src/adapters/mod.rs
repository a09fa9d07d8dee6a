//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod devto;
pub mod dom;

pub use devto::DevToClient;
