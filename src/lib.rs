//! Shared library for `student-data`
//! Student registration, identifier issuance and smartcard records

pub mod core;
pub mod logger;

pub use crate::core::*;
