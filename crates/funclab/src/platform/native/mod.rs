//! Native platform implementations using the filesystem.

mod storage;

pub use storage::FileStore;
