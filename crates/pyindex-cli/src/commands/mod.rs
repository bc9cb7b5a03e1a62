pub mod index;

pub use index::run_index;
