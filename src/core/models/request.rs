//! Course request model

use crate::core::error::BuildError;
use crate::core::models::Level;
use serde::{Deserialize, Serialize};

/// Inputs collected by a caller before building an outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRequest {
    /// Free-text subject, passed through verbatim
    pub subject: String,

    /// Proficiency level
    pub level: Level,

    /// Course length in weeks
    pub duration_weeks: u32,
}

impl CourseRequest {
    /// Create a request from already-typed values
    #[must_use]
    pub fn new(subject: impl Into<String>, level: Level, duration_weeks: u32) -> Self {
        Self {
            subject: subject.into(),
            level,
            duration_weeks,
        }
    }

    /// Create a request from raw level text
    ///
    /// # Errors
    /// Returns [`BuildError::UnrecognizedLevel`] if `level` is not a built-in level name.
    pub fn parse(
        subject: impl Into<String>,
        level: &str,
        duration_weeks: u32,
    ) -> Result<Self, BuildError> {
        Ok(Self::new(subject, level.parse()?, duration_weeks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let request = CourseRequest::new("Rust", Level::Intermediate, 6);

        assert_eq!(request.subject, "Rust");
        assert_eq!(request.level, Level::Intermediate);
        assert_eq!(request.duration_weeks, 6);
    }

    #[test]
    fn test_parse_valid_level() {
        let request = CourseRequest::parse("Data Science", "Intermediate", 1).unwrap();
        assert_eq!(request.level, Level::Intermediate);
    }

    #[test]
    fn test_parse_unknown_level() {
        let err = CourseRequest::parse("Data Science", "Guru", 1).unwrap_err();
        assert_eq!(err, BuildError::UnrecognizedLevel("Guru".to_string()));
    }

    #[test]
    fn test_parse_does_not_validate_duration() {
        // Duration is checked by the builder, not at request construction
        let request = CourseRequest::parse("ML", "Advanced", 0).unwrap();
        assert_eq!(request.duration_weeks, 0);
    }
}
