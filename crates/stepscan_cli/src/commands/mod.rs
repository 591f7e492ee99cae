//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod list;
pub mod plot;
pub mod solve;
