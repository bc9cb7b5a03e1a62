//! Romanization and scanning stages for pyindex.
//!
//! `romanize` turns a filename stem into a bag of initial-letter keys and
//! `scan` walks a music directory into an [`Index`](pyindex_core::Index).

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod romanize;
pub mod scan;

pub use config::Config;
pub use romanize::{InitialLookup, PinyinLookup, Romanizer};
pub use scan::{is_music_file, scan, Scanner, MUSIC_EXTENSIONS};
