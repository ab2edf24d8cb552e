//! Header keyword heuristics for the topic and difficulty columns.

use serde::Serialize;

/// Header substrings that mark a topic-like column.
pub const TOPIC_KEYWORDS: &[&str] = &["topic", "category", "type", "subject", "tag"];

/// Header substrings that mark a difficulty-like column.
pub const DIFFICULTY_KEYWORDS: &[&str] = &["difficulty", "level", "hard", "medium", "easy"];

/// Column indices picked out of the header row.
///
/// The two lookups are independent and may land on the same column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRoles {
    pub topic: Option<usize>,
    pub difficulty: Option<usize>,
}

/// Classifies a header row. The leftmost matching header wins for each role.
pub fn classify(header: &[String]) -> ColumnRoles {
    ColumnRoles {
        topic: find_column(header, TOPIC_KEYWORDS),
        difficulty: find_column(header, DIFFICULTY_KEYWORDS),
    }
}

/// Index of the first header whose lowercase text contains any keyword.
fn find_column(header: &[String], keywords: &[&str]) -> Option<usize> {
    header.iter().position(|name| {
        let lower = name.to_lowercase();
        keywords.iter().any(|keyword| lower.contains(keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_classify_common_headers() {
        let roles = classify(&header(&["#", "Problem", "Topic", "Difficulty", "Link"]));
        assert_eq!(roles.topic, Some(2));
        assert_eq!(roles.difficulty, Some(3));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let roles = classify(&header(&["Difficulty Level", "Name"]));
        assert_eq!(roles.difficulty, Some(0));
        assert_eq!(roles.topic, None);
    }

    #[test]
    fn test_first_match_wins() {
        let roles = classify(&header(&["Category", "Topic", "Level", "Difficulty"]));
        assert_eq!(roles.topic, Some(0));
        assert_eq!(roles.difficulty, Some(2));
    }

    #[test]
    fn test_duplicate_headers_use_first() {
        let roles = classify(&header(&["Topic", "Topic"]));
        assert_eq!(roles.topic, Some(0));
    }

    #[test]
    fn test_same_column_can_fill_both_roles() {
        let roles = classify(&header(&["Name", "Type-Level"]));
        assert_eq!(roles.topic, Some(1));
        assert_eq!(roles.difficulty, Some(1));
    }

    #[test]
    fn test_substring_matches() {
        // "Prototype" contains "type"; "Tags" contains "tag".
        assert_eq!(classify(&header(&["Prototype"])).topic, Some(0));
        assert_eq!(classify(&header(&["", "Tags"])).topic, Some(1));
    }

    #[test]
    fn test_not_found() {
        let roles = classify(&header(&["Problem", "Link", ""]));
        assert_eq!(roles, ColumnRoles::default());
        assert_eq!(classify(&[]), ColumnRoles::default());
    }
}
