//! Proficiency level model

use crate::core::error::BuildError;
use crate::core::models::TopicSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Proficiency level of a requested course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Basics through guided practice
    Beginner,
    /// Applied concepts and optimization
    Intermediate,
    /// Expert topics through a capstone
    Advanced,
}

impl Level {
    /// All levels in ascending order of difficulty
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Display name of the level (e.g., "Beginner")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Topic progression used for this level
    #[must_use]
    pub fn topic_set(self) -> &'static TopicSet {
        TopicSet::for_level(self)
    }
}

impl FromStr for Level {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BuildError::UnrecognizedLevel(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
