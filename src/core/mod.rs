//! Core registry functionality shared by the library and the CLI

pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod registry;

pub use error::{LoadError, RegistryError};
pub use registry::DataSystem;

/// Returns the current version of the `student-data` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
