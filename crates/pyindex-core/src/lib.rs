//! Core index model for pyindex.
//!
//! This crate defines the persisted record types (`IndexEntry`, `Index`),
//! the error type shared by the workspace, and the JSON persistence layer
//! that writes the index consumed by the player.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod persist;

pub use error::{Error, Result};
pub use model::{Index, IndexEntry};
pub use persist::{load, persist};
