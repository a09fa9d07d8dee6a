//! DEV.to adapter
//!
//! Implementation of the article source over the public DEV.to API.

pub mod client;

pub use client::DevToClient;
