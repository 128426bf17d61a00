//! Markdown renderer
//!
//! Each week becomes a `### Week N` heading followed by four bullet lines;
//! weeks are separated by a blank line.

use crate::core::error::RenderError;
use crate::core::models::{CurriculumDocument, WeekEntry};
use crate::core::render::{duration_label, labeled_fields, OutlineRenderer, OutputFormat};
use std::fmt::Write;

/// Embedded Markdown outline template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/outline.md");

/// Markdown outline renderer
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render a single week block
    #[must_use]
    pub fn render_week(week: &WeekEntry) -> String {
        let mut block = String::new();
        let _ = writeln!(block, "### Week {}", week.week_number);
        for (label, value) in labeled_fields(week) {
            let _ = writeln!(block, "- {label}: {value}");
        }
        block
    }

    /// Render only the week blocks, without the title header
    #[must_use]
    pub fn render_weeks(doc: &CurriculumDocument) -> String {
        doc.weeks
            .iter()
            .map(|week| format!("\n{}", Self::render_week(week)))
            .collect()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineRenderer for MarkdownRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, doc: &CurriculumDocument) -> Result<String, RenderError> {
        let duration = duration_label(doc.duration_weeks);
        let weeks = Self::render_weeks(doc);
        Ok(fill_template(MARKDOWN_TEMPLATE, |name| match name {
            "title" => Some(doc.title.as_str()),
            "level" => Some(doc.level.name()),
            "duration" => Some(duration.as_str()),
            "weeks" => Some(weeks.as_str()),
            _ => None,
        }))
    }
}

/// Substitute `{{name}}` placeholders in a single pass.
///
/// Inserted values are never scanned again, so placeholder-like text in a
/// subject survives verbatim. Unknown placeholders are left as written.
fn fill_template<'a>(template: &str, value_for: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let (before, tail) = rest.split_at(start);
        out.push_str(before);
        let Some(end) = tail.find("}}") else {
            rest = tail;
            break;
        };
        let placeholder = &tail[..end + 2];
        match value_for(&tail[2..end]) {
            Some(value) => out.push_str(value),
            None => out.push_str(placeholder),
        }
        rest = &tail[end + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build;
    use crate::core::models::Level;

    #[test]
    fn test_week_block_format() {
        let doc = build("Python Programming", Level::Beginner, 1).unwrap();

        assert_eq!(
            MarkdownRenderer::render_week(&doc.weeks[0]),
            "### Week 1\n\
             - Topic Focus: Introduction and Basics\n\
             - Learning Objective: Understand key concepts of Python Programming\n\
             - Practical Task: Hands-on exercises\n\
             - Assignment: Mini project submission\n"
        );
    }

    #[test]
    fn test_weeks_separated_by_blank_line() {
        let doc = build("Go", Level::Advanced, 2).unwrap();
        let weeks = MarkdownRenderer::render_weeks(&doc);

        assert!(weeks.starts_with("\n### Week 1\n"));
        assert!(weeks.contains("Mini project submission\n\n### Week 2\n"));
        assert_eq!(weeks.matches("### Week").count(), 2);
    }

    #[test]
    fn test_header_substitution() {
        let doc = build("Go", Level::Advanced, 1).unwrap();
        let out = MarkdownRenderer::new().render(&doc).unwrap();

        assert!(out.starts_with("## Go Curriculum\n"));
        assert!(out.contains("**Level:** Advanced | **Duration:** 1 week"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_placeholder_text_in_subject_is_verbatim() {
        let doc = build("{{level}} and {{weeks}}", Level::Beginner, 1).unwrap();
        let out = MarkdownRenderer::new().render(&doc).unwrap();

        assert!(out.starts_with("## {{level}} and {{weeks}} Curriculum\n"));
        assert!(out.contains("- Learning Objective: Understand key concepts of {{level}} and {{weeks}}\n"));
        assert_eq!(out.matches("### Week").count(), 1);
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed() {
        let out = fill_template("a {{x}} {{y}} {{z", |name| (name == "x").then_some("1"));
        assert_eq!(out, "a 1 {{y}} {{z");
    }
}
