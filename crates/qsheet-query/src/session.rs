//! Stateful wrapper with setter entry points and a cached view.

use std::sync::Arc;

use qsheet_model::{FilterState, Table};
use tracing::debug;

use crate::engine::{DerivedView, derive_view};

/// A table plus the user's filter state.
///
/// The view is computed lazily and reused until the table or the filter
/// state actually changes. Setters mirror [`FilterState`]: changing search,
/// topic, difficulty, or page size returns to page 1.
#[derive(Debug, Clone)]
pub struct QuerySession {
    table: Arc<Table>,
    state: FilterState,
    cached: Option<DerivedView>,
}

impl QuerySession {
    pub fn new(table: Arc<Table>) -> Self {
        Self::with_state(table, FilterState::new())
    }

    pub fn with_state(table: Arc<Table>, state: FilterState) -> Self {
        Self {
            table,
            state,
            cached: None,
        }
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Swaps in a freshly loaded table. The filter state is kept.
    pub fn replace_table(&mut self, table: Arc<Table>) {
        if !Arc::ptr_eq(&self.table, &table) {
            self.table = table;
            self.cached = None;
        }
    }

    /// The view for the current table and filter state.
    pub fn view(&mut self) -> &DerivedView {
        let (table, state) = (&self.table, &self.state);
        self.cached.get_or_insert_with(|| {
            debug!(
                page = state.page(),
                page_size = state.page_size(),
                "recomputing view"
            );
            derive_view(table, state)
        })
    }

    /// Returns true if a view is cached for the current inputs.
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    pub fn set_search(&mut self, search: &str) {
        self.update(|state| state.set_search(search));
    }

    pub fn set_topic(&mut self, topic: &str) {
        self.update(|state| state.set_topic(topic));
    }

    pub fn set_difficulty(&mut self, difficulty: &str) {
        self.update(|state| state.set_difficulty(difficulty));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.update(|state| state.set_page_size(page_size));
    }

    pub fn set_page(&mut self, page: usize) {
        self.update(|state| state.set_page(page));
    }

    pub fn clear_filters(&mut self) {
        self.update(FilterState::clear_filters);
    }

    /// Moves forward one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        let page = self.state.page();
        if page < self.view().total_pages {
            self.set_page(page + 1);
            true
        } else {
            false
        }
    }

    /// Moves back one page. Returns false on the first page.
    pub fn previous_page(&mut self) -> bool {
        let page = self.state.page();
        if page > 1 {
            self.set_page(page - 1);
            true
        } else {
            false
        }
    }

    /// Applies a change and drops the cached view only if the state moved.
    fn update(&mut self, change: impl FnOnce(&mut FilterState)) {
        let mut next = self.state.clone();
        change(&mut next);
        if next != self.state {
            self.state = next;
            self.cached = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_table(count: usize) -> Arc<Table> {
        let mut rows = vec![vec!["Problem".to_string(), "Topic".to_string()]];
        rows.extend((1..=count).map(|i| {
            let topic = if i % 2 == 0 { "Even" } else { "Odd" };
            vec![format!("Q{i}"), topic.to_string()]
        }));
        Arc::new(Table::from_rows(rows))
    }

    #[test]
    fn test_view_is_cached_until_change() {
        let mut session = QuerySession::new(numbered_table(23));
        assert!(!session.is_cached());
        assert_eq!(session.view().total_pages, 3);
        assert!(session.is_cached());

        session.set_page(1);
        assert!(session.is_cached(), "unchanged state keeps the cache");

        session.set_page(2);
        assert!(!session.is_cached());
        assert_eq!(session.view().start_index, 11);
    }

    #[test]
    fn test_topic_change_returns_to_first_page() {
        let mut session = QuerySession::new(numbered_table(30));
        session.set_page(3);
        assert_eq!(session.view().page, 3);

        session.set_topic("Odd");
        let view = session.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_items, 15);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn test_same_topic_keeps_page_and_cache() {
        let mut session = QuerySession::new(numbered_table(60));
        session.set_topic("Even");
        session.set_page(3);
        assert_eq!(session.view().start_index, 21);

        session.set_topic("Even");
        session.set_page_size(10);
        assert!(session.is_cached());
        assert_eq!(session.view().page, 3);
    }

    #[test]
    fn test_next_and_previous_page() {
        let mut session = QuerySession::new(numbered_table(23));
        assert!(!session.previous_page());
        assert!(session.next_page());
        assert!(session.next_page());
        assert!(!session.next_page());
        assert_eq!(session.state().page(), 3);
        assert!(session.previous_page());
        assert_eq!(session.state().page(), 2);
    }

    #[test]
    fn test_replace_table_invalidates() {
        let mut session = QuerySession::new(numbered_table(5));
        assert_eq!(session.view().total_items, 5);
        session.replace_table(numbered_table(12));
        assert_eq!(session.view().total_items, 12);
    }

    #[test]
    fn test_clear_filters() {
        let mut session = QuerySession::new(numbered_table(10));
        session.set_search("q1");
        session.set_topic("Odd");
        assert_eq!(session.view().total_items, 1);
        session.clear_filters();
        assert_eq!(session.view().total_items, 10);
    }
}
