//! Function lab application
//!
//! Wraps the `funclab_core` engine with what a running program needs:
//! - Filesystem (native) and LocalStorage (web) persistence backends
//! - YAML application config
//! - File logging with size-based trimming
//! - A `clap` command-line front end (native)
//! - A `wasm-bindgen` facade for browser front ends (web)

pub mod config;
pub mod platform;

#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
pub mod commands;
#[cfg(feature = "native")]
mod logging;

#[cfg(feature = "web")]
pub mod web;

pub use config::AppConfig;

#[cfg(feature = "native")]
pub use logging::init_logging;
