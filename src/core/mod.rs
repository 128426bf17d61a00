//! Core curriculum generation: models, builder, renderers and configuration

pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod render;

pub use builder::{build, build_request};
pub use error::{BuildError, RenderError};

/// Returns the current version of the `CurricuForge` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
