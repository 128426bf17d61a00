//! Levels command handler

use curricu_forge::core::models::Level;
use std::fmt::Write;

/// Text listing every level with its numbered topic progression
pub fn listing() -> String {
    let mut out = String::new();
    for level in Level::ALL {
        let _ = writeln!(out, "{level}");
        for (idx, topic) in level.topic_set().topics().iter().enumerate() {
            let _ = writeln!(out, "  {}. {topic}", idx + 1);
        }
    }
    out
}

/// Print the built-in levels and their topics
pub fn run() {
    print!("{}", listing());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_covers_all_levels() {
        let out = listing();
        assert!(out.starts_with("Beginner\n  1. Introduction and Basics\n"));
        assert!(out.contains("Intermediate\n  1. Advanced Concepts\n"));
        assert!(out.contains("Advanced\n  1. Expert-Level Topics\n"));
        assert!(out.contains("  4. Capstone Project\n"));
        assert_eq!(out.lines().count(), 15);
    }
}
