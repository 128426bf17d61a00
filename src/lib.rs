//! Library for `CurricuForge`
//!
//! Builds deterministic week-by-week study outlines from a subject, a
//! proficiency level and a duration, and renders them for display.

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
