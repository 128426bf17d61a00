//! Outline rendering
//!
//! Turns a built [`CurriculumDocument`] into displayable text. Each format
//! renders every week in order with its four labeled fields; formats differ
//! only in markup.

pub mod formats;

use crate::core::error::RenderError;
use crate::core::models::{CurriculumDocument, WeekEntry};
use crate::debug;
use std::fs;
use std::path::Path;

pub use formats::{HtmlRenderer, JsonRenderer, MarkdownRenderer, OutputFormat, TextRenderer};

/// Label for the week's topic
pub const TOPIC_LABEL: &str = "Topic Focus";
/// Label for the week's objective
pub const OBJECTIVE_LABEL: &str = "Learning Objective";
/// Label for the week's practical task
pub const TASK_LABEL: &str = "Practical Task";
/// Label for the week's assignment
pub const ASSIGNMENT_LABEL: &str = "Assignment";

/// The four labeled lines of a week, in display order
#[must_use]
pub fn labeled_fields(week: &WeekEntry) -> [(&'static str, &str); 4] {
    [
        (TOPIC_LABEL, week.topic_focus.as_str()),
        (OBJECTIVE_LABEL, week.objective.as_str()),
        (TASK_LABEL, week.practical_task.as_str()),
        (ASSIGNMENT_LABEL, week.assignment.as_str()),
    ]
}

/// Human-readable duration (e.g., "1 week", "6 weeks")
#[must_use]
pub fn duration_label(weeks: u32) -> String {
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{weeks} weeks")
    }
}

/// Trait for outline renderers
pub trait OutlineRenderer {
    /// Format this renderer produces
    fn format(&self) -> OutputFormat;

    /// Render the outline as a string
    ///
    /// # Errors
    /// Returns an error if templating or serialization fails
    fn render(&self, doc: &CurriculumDocument) -> Result<String, RenderError>;

    /// Render the outline and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written
    fn generate(&self, doc: &CurriculumDocument, output_path: &Path) -> Result<(), RenderError> {
        let content = self.render(doc)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        debug!(
            "Wrote {} outline to {}",
            self.format(),
            output_path.display()
        );
        Ok(())
    }
}

/// Renderer for `format`
#[must_use]
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutlineRenderer> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}

/// Render `doc` in `format`
///
/// # Errors
/// Returns an error if the renderer fails
pub fn render(doc: &CurriculumDocument, format: OutputFormat) -> Result<String, RenderError> {
    renderer_for(format).render(doc)
}
