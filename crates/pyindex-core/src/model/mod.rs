pub mod entry;
pub mod index;

pub use entry::IndexEntry;
pub use index::Index;
