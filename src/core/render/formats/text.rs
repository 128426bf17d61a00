//! Plain-text renderer

use crate::core::error::RenderError;
use crate::core::models::CurriculumDocument;
use crate::core::render::{duration_label, labeled_fields, OutlineRenderer, OutputFormat};
use std::fmt::Write;

/// Plain-text outline renderer for terminals and logs
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineRenderer for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, doc: &CurriculumDocument) -> Result<String, RenderError> {
        let mut out = String::new();
        let _ = writeln!(out, "{}", doc.title);
        let _ = writeln!(
            out,
            "Level: {} | Duration: {}",
            doc.level,
            duration_label(doc.duration_weeks)
        );

        for week in &doc.weeks {
            let _ = writeln!(out, "\nWeek {}", week.week_number);
            for (label, value) in labeled_fields(week) {
                let _ = writeln!(out, "  {label}: {value}");
            }
        }

        Ok(out)
    }
}
