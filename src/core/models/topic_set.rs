//! Built-in topic progressions

use crate::core::models::Level;

/// Fixed, ordered topic labels for one level. Never empty.
#[derive(Debug, PartialEq, Eq)]
pub struct TopicSet {
    level: Level,
    topics: &'static [&'static str],
}

/// basics → concepts → projects → practice
static BEGINNER: TopicSet = TopicSet {
    level: Level::Beginner,
    topics: &[
        "Introduction and Basics",
        "Core Concepts",
        "Simple Projects",
        "Practice & Revision",
    ],
};

/// advanced concepts → applications → mini projects → optimization
static INTERMEDIATE: TopicSet = TopicSet {
    level: Level::Intermediate,
    topics: &[
        "Advanced Concepts",
        "Real-world Applications",
        "Mini Projects",
        "Performance Optimization",
    ],
};

/// expert topics → architecture → case studies → capstone
static ADVANCED: TopicSet = TopicSet {
    level: Level::Advanced,
    topics: &[
        "Expert-Level Topics",
        "Architecture & Design",
        "Industry Case Studies",
        "Capstone Project",
    ],
};

impl TopicSet {
    /// Topic set owned by `level`
    #[must_use]
    pub fn for_level(level: Level) -> &'static Self {
        match level {
            Level::Beginner => &BEGINNER,
            Level::Intermediate => &INTERMEDIATE,
            Level::Advanced => &ADVANCED,
        }
    }

    /// Level this set belongs to
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Topic labels in teaching order
    #[must_use]
    pub const fn topics(&self) -> &'static [&'static str] {
        self.topics
    }

    /// Number of topics before the progression repeats
    #[must_use]
    pub const fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the set has no topics; `false` for every built-in level
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topic for a zero-based week index, cycling through the set
    #[must_use]
    pub fn topic_for_week(&self, week_index: usize) -> &'static str {
        self.topics[week_index % self.topics.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_four_topics() {
        for level in Level::ALL {
            let set = TopicSet::for_level(level);
            assert_eq!(set.len(), 4);
            assert!(!set.is_empty());
            assert_eq!(set.level(), level);
        }
    }

    #[test]
    fn test_topic_for_week_cycles() {
        let set = TopicSet::for_level(Level::Beginner);
        assert_eq!(set.topic_for_week(0), "Introduction and Basics");
        assert_eq!(set.topic_for_week(3), "Practice & Revision");
        assert_eq!(set.topic_for_week(4), "Introduction and Basics");
        assert_eq!(set.topic_for_week(9), "Core Concepts");
    }

    #[test]
    fn test_sets_are_distinct() {
        let beginner = TopicSet::for_level(Level::Beginner).topics();
        let intermediate = TopicSet::for_level(Level::Intermediate).topics();
        let advanced = TopicSet::for_level(Level::Advanced).topics();

        assert_ne!(beginner, intermediate);
        assert_ne!(intermediate, advanced);
        assert_eq!(intermediate[0], "Advanced Concepts");
        assert_eq!(advanced[3], "Capstone Project");
    }
}
