//! CLI command handlers for `CurricuForge`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod generate;
pub mod levels;
