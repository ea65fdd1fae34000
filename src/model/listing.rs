//! Paginated list state shared by every list screen

use super::envelope::{ListQuery, Page};

/// Rows of one page plus the query that produced them
///
/// Rows and total only ever come from a server response; the list never
/// edits them locally.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    /// Query for the next fetch
    pub query: ListQuery,
    /// Query behind the rows on display
    confirmed: ListQuery,
    pub rows: Vec<T>,
    /// Total as reported by the server
    pub total: u64,
    pub loading: bool,
    pub selected: usize,
    /// Whether the name filter is being typed
    pub search_mode: bool,
    /// Name typed in search mode; reaches the query only on submit
    pub search_draft: String,
}

impl<T> Listing<T> {
    pub fn new(limit: u32) -> Self {
        Self {
            query: ListQuery::new(limit),
            confirmed: ListQuery::new(limit),
            rows: Vec::new(),
            total: 0,
            loading: false,
            selected: 0,
            search_mode: false,
            search_draft: String::new(),
        }
    }

    /// Replace rows and total with a server page
    pub fn apply_page(&mut self, page: Page<T>) {
        self.rows = page.data;
        self.total = page.total;
        self.confirmed = self.query.clone();
        self.loading = false;
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    /// Filter every fetch of this list carries, such as its parent id
    pub fn set_fixed_filter(&mut self, key: &str, value: &str) {
        self.query.set_filter(key, value);
        self.confirmed.set_filter(key, value);
    }

    /// A failed fetch keeps whatever was displayed before, including the
    /// page and filters that produced it
    pub fn fetch_failed(&mut self) {
        self.loading = false;
        self.query = self.confirmed.clone();
    }

    pub fn selected_row(&self) -> Option<&T> {
        self.rows.get(self.selected)
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.rows.len();
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.rows.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    pub fn page_count(&self) -> u32 {
        self.query.page_count(self.total)
    }

    /// Advance to the next page; returns false when already on the last one
    pub fn next_page(&mut self) -> bool {
        if self.query.page >= self.page_count() {
            return false;
        }
        self.query.page += 1;
        self.selected = 0;
        true
    }

    /// Go back one page; returns false on the first page
    pub fn previous_page(&mut self) -> bool {
        if self.query.page <= 1 {
            return false;
        }
        self.query.page -= 1;
        self.selected = 0;
        true
    }

    /// Start a new search from the first page
    pub fn reset_to_first_page(&mut self) {
        self.query.page = 1;
        self.selected = 0;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
        self.search_draft = self.query.name.clone();
    }

    /// Leave search mode, discarding the draft
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
        self.search_draft.clear();
    }

    /// Commit the draft as the name filter and go back to page 1
    pub fn submit_search(&mut self) {
        self.query.name = std::mem::take(&mut self.search_draft);
        self.search_mode = false;
        self.reset_to_first_page();
    }

    pub fn search_input(&mut self, c: char) {
        self.search_draft.push(c);
    }

    pub fn search_backspace(&mut self) {
        self.search_draft.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: Vec<&str>, total: u64) -> Page<String> {
        Page {
            data: rows.into_iter().map(String::from).collect(),
            total,
        }
    }

    #[test]
    fn test_apply_page_replaces_rows_and_takes_server_total() {
        let mut listing: Listing<String> = Listing::new(2);
        listing.apply_page(page(vec!["a", "b"], 57));
        assert_eq!(listing.rows, vec!["a", "b"]);
        assert_eq!(listing.total, 57);

        listing.apply_page(page(vec!["c"], 3));
        assert_eq!(listing.rows, vec!["c"]);
        assert_eq!(listing.total, 3);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_rows() {
        let mut listing: Listing<String> = Listing::new(10);
        listing.apply_page(page(vec!["a"], 1));
        listing.loading = true;
        listing.fetch_failed();
        assert!(!listing.loading);
        assert_eq!(listing.rows, vec!["a"]);
    }

    #[test]
    fn test_fetch_failure_restores_page_and_filters() {
        let mut listing: Listing<String> = Listing::new(10);
        listing.apply_page(page(vec!["a"], 30));
        assert!(listing.next_page());
        listing.query.set_filter("status", "APPROVED");
        listing.fetch_failed();
        assert_eq!(listing.query.page, 1);
        assert_eq!(listing.query.filter("status"), None);

        assert!(listing.next_page());
        assert_eq!(listing.query.page, 2);
        listing.apply_page(page(vec!["b"], 30));
        listing.fetch_failed();
        assert_eq!(listing.query.page, 2);
    }

    #[test]
    fn test_fixed_filter_survives_failed_first_fetch() {
        let mut listing: Listing<String> = Listing::new(10);
        listing.set_fixed_filter("courseId", "c1");
        listing.fetch_failed();
        assert_eq!(listing.query.filter("courseId"), Some("c1"));
    }

    #[test]
    fn test_cancelled_search_leaves_query_alone() {
        let mut listing: Listing<String> = Listing::new(10);
        listing.query.name = "kanji".to_string();
        listing.enter_search_mode();
        assert_eq!(listing.search_draft, "kanji");
        listing.search_backspace();
        listing.search_input('o');
        assert_eq!(listing.query.name, "kanji");
        listing.exit_search_mode();
        assert_eq!(listing.query.name, "kanji");
        assert!(listing.search_draft.is_empty());

        listing.enter_search_mode();
        listing.search_input('!');
        listing.submit_search();
        assert_eq!(listing.query.name, "kanji!");
        assert!(!listing.search_mode);
    }

    #[test]
    fn test_selection_is_clamped_after_smaller_page() {
        let mut listing: Listing<String> = Listing::new(10);
        listing.apply_page(page(vec!["a", "b", "c"], 3));
        listing.select_last();
        listing.apply_page(page(vec!["a"], 1));
        assert_eq!(listing.selected, 0);
    }

    #[test]
    fn test_page_bounds() {
        let mut listing: Listing<String> = Listing::new(10);
        listing.apply_page(page(vec!["a"], 25));
        assert_eq!(listing.page_count(), 3);
        assert!(!listing.previous_page());
        assert!(listing.next_page());
        assert!(listing.next_page());
        assert!(!listing.next_page());
        assert_eq!(listing.query.page, 3);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut listing: Listing<String> = Listing::new(10);
        listing.apply_page(page(vec!["a", "b"], 2));
        listing.previous();
        assert_eq!(listing.selected, 1);
        listing.next();
        assert_eq!(listing.selected, 0);
    }
}
