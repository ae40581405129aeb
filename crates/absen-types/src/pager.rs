//! Page cursor and program filter of the data table

/// Rows requested per page
pub const PAGE_SIZE: u32 = 10;

/// Current page clamped to `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    total_pages: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

impl PageCursor {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Cursor on the next page, or `None` at the last one.
    pub fn next(&self) -> Option<Self> {
        self.has_next().then(|| Self {
            page: self.page + 1,
            ..*self
        })
    }

    /// Cursor on the previous page, or `None` at page 1.
    pub fn prev(&self) -> Option<Self> {
        self.has_prev().then(|| Self {
            page: self.page - 1,
            ..*self
        })
    }

    /// Apply the page count of a fresh response. A count of 0 means one
    /// (empty) page; the current page is pulled back inside the new range.
    pub fn with_total_pages(&self, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: self.page.min(total_pages),
            total_pages,
        }
    }

    /// Back to page 1, used when the filter changes.
    pub fn reset(&self) -> Self {
        Self {
            page: 1,
            ..*self
        }
    }
}

/// Program filter of the data table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProgramFilter {
    #[default]
    All,
    Only(String),
}

impl ProgramFilter {
    /// Value used for the "All" entry of the dropdown.
    pub const ALL: &'static str = "All";

    pub fn from_option(program: Option<&str>) -> Self {
        match program {
            Some(p) if !p.is_empty() && p != Self::ALL => ProgramFilter::Only(p.to_string()),
            _ => ProgramFilter::All,
        }
    }

    /// Value sent as the `program` query parameter; empty for all programs.
    pub fn query_value(&self) -> &str {
        match self {
            ProgramFilter::All => "",
            ProgramFilter::Only(p) => p,
        }
    }

    /// Value of the dropdown option this filter selects.
    pub fn option_value(&self) -> &str {
        match self {
            ProgramFilter::All => Self::ALL,
            ProgramFilter::Only(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_at_first_page_is_noop() {
        let cursor = PageCursor::default().with_total_pages(3);
        assert!(!cursor.has_prev());
        assert_eq!(cursor.prev(), None);
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut cursor = PageCursor::default().with_total_pages(2);
        cursor = cursor.next().unwrap();
        assert_eq!(cursor.page(), 2);
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_walk_never_leaves_range() {
        let mut cursor = PageCursor::default().with_total_pages(4);
        for _ in 0..10 {
            if let Some(next) = cursor.next() {
                cursor = next;
            }
            assert!((1..=4).contains(&cursor.page()));
        }
        assert_eq!(cursor.page(), 4);
        for _ in 0..10 {
            if let Some(prev) = cursor.prev() {
                cursor = prev;
            }
            assert!((1..=4).contains(&cursor.page()));
        }
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let cursor = PageCursor::default()
            .with_total_pages(5)
            .next()
            .and_then(|c| c.next())
            .unwrap();
        assert_eq!(cursor.page(), 3);
        let shrunk = cursor.with_total_pages(2);
        assert_eq!(shrunk.page(), 2);
        let empty = cursor.with_total_pages(0);
        assert_eq!((empty.page(), empty.total_pages()), (1, 1));
        assert_eq!(cursor.reset().page(), 1);
    }

    #[test]
    fn test_program_filter() {
        assert_eq!(ProgramFilter::from_option(None), ProgramFilter::All);
        assert_eq!(ProgramFilter::from_option(Some("All")), ProgramFilter::All);
        let web = ProgramFilter::from_option(Some("Web"));
        assert_eq!(web.query_value(), "Web");
        assert_eq!(ProgramFilter::All.query_value(), "");
        assert_eq!(ProgramFilter::All.option_value(), "All");
    }
}
