//! Domain layer
//!
//! Contains the feed model with no DOM or network dependencies.
//! - `entities`: Article records and load outcomes
//! - `ports`: Trait definitions for the network and the page

pub mod entities;
pub mod ports;
