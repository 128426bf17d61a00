//! Curriculum builder
//!
//! Maps a subject, level and duration to a [`CurriculumDocument`]. Equal
//! inputs produce equal documents.

use crate::core::error::BuildError;
use crate::core::models::{CourseRequest, CurriculumDocument, Level, WeekEntry};
use crate::debug;

/// Practical task assigned every week
pub const PRACTICAL_TASK: &str = "Hands-on exercises";

/// Assignment given every week
pub const ASSIGNMENT: &str = "Mini project submission";

/// Learning objective for a subject
#[must_use]
pub fn objective_for(subject: &str) -> String {
    format!("Understand key concepts of {subject}")
}

/// Title shown above an outline for a subject
#[must_use]
pub fn title_for(subject: &str) -> String {
    format!("{subject} Curriculum")
}

/// Build a week-by-week outline.
///
/// Week `n` takes its topic from the level's topic set at position
/// `(n - 1) mod len`, so longer courses repeat the progression. `subject` is
/// not validated and appears verbatim in every objective.
///
/// # Errors
/// Returns [`BuildError::InvalidDuration`] when `duration_weeks` is zero.
///
/// # Examples
/// ```
/// use curricu_forge::core::builder::build;
/// use curricu_forge::core::models::Level;
///
/// let doc = build("Data Science", Level::Intermediate, 1).unwrap();
/// assert_eq!(doc.weeks.len(), 1);
/// assert_eq!(doc.weeks[0].topic_focus, "Advanced Concepts");
/// ```
pub fn build(
    subject: &str,
    level: Level,
    duration_weeks: u32,
) -> Result<CurriculumDocument, BuildError> {
    if duration_weeks == 0 {
        return Err(BuildError::InvalidDuration(duration_weeks));
    }

    let topics = level.topic_set();
    let objective = objective_for(subject);

    let weeks = (1..=duration_weeks)
        .zip(0_usize..)
        .map(|(week_number, index)| WeekEntry {
            week_number,
            topic_focus: topics.topic_for_week(index).to_string(),
            objective: objective.clone(),
            practical_task: PRACTICAL_TASK.to_string(),
            assignment: ASSIGNMENT.to_string(),
        })
        .collect();

    debug!("Built {duration_weeks}-week {level} outline for '{subject}'");

    Ok(CurriculumDocument {
        title: title_for(subject),
        subject: subject.to_string(),
        level,
        duration_weeks,
        weeks,
    })
}

/// Build an outline from a [`CourseRequest`].
///
/// # Errors
/// Same as [`build`].
pub fn build_request(request: &CourseRequest) -> Result<CurriculumDocument, BuildError> {
    build(&request.subject, request.level, request.duration_weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_four_weeks() {
        let doc = build("Python Programming", Level::Beginner, 4).unwrap();

        assert_eq!(
            doc.topics(),
            vec![
                "Introduction and Basics",
                "Core Concepts",
                "Simple Projects",
                "Practice & Revision",
            ]
        );
        assert_eq!(doc.title, "Python Programming Curriculum");
        assert_eq!(doc.duration_weeks, 4);
    }

    #[test]
    fn test_single_week_intermediate() {
        let doc = build("Data Science", Level::Intermediate, 1).unwrap();

        assert_eq!(doc.week_count(), 1);
        let week = &doc.weeks[0];
        assert_eq!(week.week_number, 1);
        assert_eq!(week.topic_focus, "Advanced Concepts");
        assert_eq!(week.objective, "Understand key concepts of Data Science");
        assert_eq!(week.practical_task, "Hands-on exercises");
        assert_eq!(week.assignment, "Mini project submission");
    }

    #[test]
    fn test_advanced_cycle_repeats() {
        let doc = build("ML", Level::Advanced, 6).unwrap();

        assert_eq!(
            doc.topics(),
            vec![
                "Expert-Level Topics",
                "Architecture & Design",
                "Industry Case Studies",
                "Capstone Project",
                "Expert-Level Topics",
                "Architecture & Design",
            ]
        );
    }

    #[test]
    fn test_zero_weeks_is_rejected() {
        assert_eq!(
            build("Anything", Level::Beginner, 0),
            Err(BuildError::InvalidDuration(0))
        );
    }

    #[test]
    fn test_empty_subject_passes_through() {
        let doc = build("", Level::Beginner, 2).unwrap();
        assert!(doc
            .weeks
            .iter()
            .all(|w| w.objective == "Understand key concepts of "));
    }

    #[test]
    fn test_build_request_matches_build() {
        let request = CourseRequest::new("Rust", Level::Advanced, 5);
        assert_eq!(
            build_request(&request),
            build("Rust", Level::Advanced, 5)
        );
    }
}
