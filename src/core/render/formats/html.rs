//! HTML renderer
//!
//! Produces a self-contained page through an askama template. Subject text is
//! HTML-escaped by the template engine.

use crate::core::error::RenderError;
use crate::core::models::{CurriculumDocument, WeekEntry};
use crate::core::render::{
    duration_label, OutlineRenderer, OutputFormat, ASSIGNMENT_LABEL, OBJECTIVE_LABEL,
    TASK_LABEL, TOPIC_LABEL,
};
use askama::Template;

#[derive(Template)]
#[template(path = "outline.html")]
struct OutlinePage<'a> {
    title: &'a str,
    level: &'a str,
    duration: String,
    weeks: &'a [WeekEntry],
    topic_label: &'a str,
    objective_label: &'a str,
    task_label: &'a str,
    assignment_label: &'a str,
}

/// HTML outline renderer
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineRenderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, doc: &CurriculumDocument) -> Result<String, RenderError> {
        let page = OutlinePage {
            title: &doc.title,
            level: doc.level.name(),
            duration: duration_label(doc.duration_weeks),
            weeks: &doc.weeks,
            topic_label: TOPIC_LABEL,
            objective_label: OBJECTIVE_LABEL,
            task_label: TASK_LABEL,
            assignment_label: ASSIGNMENT_LABEL,
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build;
    use crate::core::models::Level;

    #[test]
    fn test_html_contains_each_week() {
        let doc = build("Rust", Level::Beginner, 3).unwrap();
        let out = HtmlRenderer::new().render(&doc).unwrap();

        assert!(out.contains("<title>Rust Curriculum</title>"));
        assert!(out.contains("Week 1"));
        assert!(out.contains("Week 3"));
        assert_eq!(out.matches("<section class=\"week\">").count(), 3);
    }

    #[test]
    fn test_html_escapes_subject() {
        let doc = build("<script>", Level::Beginner, 1).unwrap();
        let out = HtmlRenderer::new().render(&doc).unwrap();

        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_escapes_topic_ampersand() {
        let doc = build("Rust", Level::Beginner, 4).unwrap();
        let out = HtmlRenderer::new().render(&doc).unwrap();
        assert!(out.contains("Practice &amp; Revision"));
    }
}
