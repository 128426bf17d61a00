//! Curriculum document model

use crate::core::models::Level;
use serde::{Deserialize, Serialize};

/// One week of generated content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEntry {
    /// 1-based week number
    pub week_number: u32,

    /// Topic label taken from the level's topic set
    pub topic_focus: String,

    /// Learning objective mentioning the subject
    pub objective: String,

    /// Practical task for the week
    pub practical_task: String,

    /// Assignment for the week
    pub assignment: String,
}

/// Full outline for a request: header metadata plus weeks in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumDocument {
    /// Title shown above the outline (e.g., "Rust Curriculum")
    pub title: String,

    /// Subject as requested
    pub subject: String,

    /// Level the topics were drawn from
    pub level: Level,

    /// Requested duration; equals `weeks.len()`
    pub duration_weeks: u32,

    /// Week entries numbered 1..=`duration_weeks`
    pub weeks: Vec<WeekEntry>,
}

impl CurriculumDocument {
    /// Number of weeks in the outline
    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Look up a week by its 1-based number
    #[must_use]
    pub fn week(&self, week_number: u32) -> Option<&WeekEntry> {
        let index = usize::try_from(week_number.checked_sub(1)?).ok()?;
        self.weeks.get(index)
    }

    /// Topic labels in week order
    #[must_use]
    pub fn topics(&self) -> Vec<&str> {
        self.weeks.iter().map(|w| w.topic_focus.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurriculumDocument {
        let weeks = (1..=2)
            .map(|n| WeekEntry {
                week_number: n,
                topic_focus: format!("Topic {n}"),
                objective: "Understand key concepts of Go".to_string(),
                practical_task: "Hands-on exercises".to_string(),
                assignment: "Mini project submission".to_string(),
            })
            .collect();
        CurriculumDocument {
            title: "Go Curriculum".to_string(),
            subject: "Go".to_string(),
            level: Level::Beginner,
            duration_weeks: 2,
            weeks,
        }
    }

    #[test]
    fn test_week_lookup_is_one_based() {
        let doc = sample();
        assert_eq!(doc.week(1).map(|w| w.topic_focus.as_str()), Some("Topic 1"));
        assert_eq!(doc.week(2).map(|w| w.topic_focus.as_str()), Some("Topic 2"));
        assert!(doc.week(0).is_none());
        assert!(doc.week(3).is_none());
    }

    #[test]
    fn test_topics_in_order() {
        assert_eq!(sample().topics(), vec!["Topic 1", "Topic 2"]);
        assert_eq!(sample().week_count(), 2);
    }
}
