//! Error types for curriculum building and rendering

use thiserror::Error;

/// Errors raised while turning a request into a [`CurriculumDocument`].
///
/// [`CurriculumDocument`]: crate::core::models::CurriculumDocument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Requested duration is shorter than one week.
    #[error("Invalid duration: {0} weeks (must be at least 1)")]
    InvalidDuration(u32),

    /// Level text does not name one of the built-in levels.
    #[error("Unrecognized level: '{0}' (expected Beginner, Intermediate or Advanced)")]
    UnrecognizedLevel(String),
}

/// Errors raised while rendering or writing an outline.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output format name is not supported.
    #[error("Unknown output format: '{0}' (expected markdown, text, html or json)")]
    UnknownFormat(String),

    /// HTML template rendering failed.
    #[error("HTML template error: {0}")]
    Template(#[from] askama::Error),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the rendered outline failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_messages() {
        assert_eq!(
            BuildError::InvalidDuration(0).to_string(),
            "Invalid duration: 0 weeks (must be at least 1)"
        );
        assert!(BuildError::UnrecognizedLevel("Expert".to_string())
            .to_string()
            .contains("'Expert'"));
    }

    #[test]
    fn test_render_error_from_io() {
        let err: RenderError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
