//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The stub article source runs on tokio time, so tests using
//! `start_paused` can race it against the loader's timeout without waiting.
//! `stub_server` serves canned DEV.to responses over real HTTP for the
//! reqwest adapter.

pub mod fixtures;
pub mod mocks;
pub mod stub_server;

pub use fixtures::*;
pub use mocks::*;
pub use stub_server::*;
