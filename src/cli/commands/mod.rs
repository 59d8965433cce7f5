//! CLI command handlers for `studentdata`.
//!
//! Each command is implemented in its own submodule.

pub mod catalog;
pub mod config;
pub mod register;
