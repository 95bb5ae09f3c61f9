//! Platform storage backends for the engine's key-value port.
//!
//! - [`FileStore`]: one JSON file per key in the data directory (native)
//! - [`WebStorage`]: browser LocalStorage (web)
//!
//! Both implement [`funclab_core::storage::KeyValueStore`], so the catalogs
//! never know which platform they run on.

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "native")]
pub use native::FileStore;

#[cfg(feature = "web")]
pub use web::WebStorage;
