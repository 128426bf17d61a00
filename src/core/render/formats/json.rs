//! JSON renderer

use crate::core::error::RenderError;
use crate::core::models::CurriculumDocument;
use crate::core::render::{OutlineRenderer, OutputFormat};

/// Structured JSON renderer; the output deserializes back into a [`CurriculumDocument`]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, doc: &CurriculumDocument) -> Result<String, RenderError> {
        let mut json = serde_json::to_string_pretty(doc)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build;
    use crate::core::models::Level;

    #[test]
    fn test_json_field_names() {
        let doc = build("SQL", Level::Beginner, 1).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&JsonRenderer::new().render(&doc).unwrap()).unwrap();

        assert_eq!(value["level"], "Beginner");
        assert_eq!(value["duration_weeks"], 1);
        assert_eq!(value["weeks"][0]["week_number"], 1);
        assert_eq!(value["weeks"][0]["topic_focus"], "Introduction and Basics");
    }

    #[test]
    fn test_json_parses_back_to_document() {
        let doc = build("SQL", Level::Advanced, 5).unwrap();
        let json = JsonRenderer::new().render(&doc).unwrap();
        let back: CurriculumDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
