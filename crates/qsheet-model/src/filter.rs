//! Search, filter, and pagination state.

use std::fmt;

use serde::Serialize;

/// Page sizes offered to the user.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The user's current query: search text, exact-match filters, and page.
///
/// Changing the search text, either filter, or the page size to a different
/// value moves the selection back to page 1. Only [`FilterState::set_page`]
/// keeps the other fields and moves the page alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    search: String,
    topic: String,
    difficulty: String,
    page: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            topic: String::new(),
            difficulty: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    /// Current 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Setting the current value again leaves the page where it is.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search != search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        let topic = topic.into();
        if self.topic != topic {
            self.topic = topic;
            self.page = 1;
        }
    }

    pub fn set_difficulty(&mut self, difficulty: impl Into<String>) {
        let difficulty = difficulty.into();
        if self.difficulty != difficulty {
            self.difficulty = difficulty;
            self.page = 1;
        }
    }

    /// Sets the page size; zero is clamped to one.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if self.page_size != page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    /// Moves to a 1-based page; zero is clamped to one.
    ///
    /// Pages past the end are allowed and simply yield an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn clear_topic(&mut self) {
        self.set_topic(String::new());
    }

    pub fn clear_difficulty(&mut self) {
        self.set_difficulty(String::new());
    }

    /// Clears search, topic, and difficulty at once. Page size is kept.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.topic.clear();
        self.difficulty.clear();
        self.page = 1;
    }

    pub fn has_active_filters(&self) -> bool {
        !(self.search.is_empty() && self.topic.is_empty() && self.difficulty.is_empty())
    }

    /// Non-empty filters in display order (search, topic, difficulty).
    pub fn active_filters(&self) -> Vec<ActiveFilter<'_>> {
        [
            (FilterKind::Search, self.search.as_str()),
            (FilterKind::Topic, self.topic.as_str()),
            (FilterKind::Difficulty, self.difficulty.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(kind, value)| ActiveFilter { kind, value })
        .collect()
    }
}

/// Which part of the filter state a chip refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Search,
    Topic,
    Difficulty,
}

/// A non-empty filter, rendered as a short chip such as `Topic: Arrays`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFilter<'a> {
    pub kind: FilterKind,
    pub value: &'a str,
}

impl fmt::Display for ActiveFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FilterKind::Search => write!(f, "Search: \"{}\"", self.value),
            FilterKind::Topic => write!(f, "Topic: {}", self.value),
            FilterKind::Difficulty => write!(f, "Level: {}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = FilterState::new();
        assert_eq!(state.search(), "");
        assert_eq!(state.topic(), "");
        assert_eq!(state.difficulty(), "");
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 10);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = FilterState::new();
        state.set_page(3);
        state.set_topic("Graphs");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.set_search("sum");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.set_difficulty("Hard");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.set_page_size(20);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 20);
    }

    #[test]
    fn test_unchanged_values_keep_page() {
        let mut state = FilterState::new();
        state.set_topic("Graphs");
        state.set_search("sum");
        state.set_difficulty("Hard");
        state.set_page(3);

        state.set_topic("Graphs");
        state.set_search("sum");
        state.set_difficulty("Hard");
        state.set_page_size(DEFAULT_PAGE_SIZE);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_set_page_keeps_filters() {
        let mut state = FilterState::new();
        state.set_topic("Graphs");
        state.set_page(4);
        assert_eq!(state.page(), 4);
        assert_eq!(state.topic(), "Graphs");
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let mut state = FilterState::new();
        state.set_page(0);
        assert_eq!(state.page(), 1);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn test_clear_filters_keeps_page_size() {
        let mut state = FilterState::new();
        state.set_page_size(50);
        state.set_search("tree");
        state.set_topic("Trees");
        state.set_difficulty("Easy");
        state.set_page(2);

        state.clear_filters();

        assert!(!state.has_active_filters());
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 50);
    }

    #[test]
    fn test_active_filter_labels() {
        let mut state = FilterState::new();
        state.set_search("two sum");
        state.set_difficulty("Easy");
        let labels: Vec<String> = state
            .active_filters()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, vec!["Search: \"two sum\"", "Level: Easy"]);
    }

    #[test]
    fn test_default_page_size_is_an_option() {
        assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
    }
}
