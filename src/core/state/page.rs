use crate::{core::msg::page::PageMsg, domain::pagination::PageSize};

/// Current page of the gallery (1-based) and the fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: PageSize,
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageSize::DEFAULT)
    }
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jump to `page`, clamped into `1..=max(page_count, 1)`
    pub fn go_to(&mut self, page: usize, page_count: usize) -> bool {
        let target = page.clamp(1, page_count.max(1));
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }

    pub fn next(&mut self, page_count: usize) -> bool {
        self.go_to(self.current_page.saturating_add(1), page_count)
    }

    pub fn prev(&mut self, page_count: usize) -> bool {
        self.go_to(self.current_page.saturating_sub(1), page_count)
    }

    pub fn first(&mut self, page_count: usize) -> bool {
        self.go_to(1, page_count)
    }

    pub fn last(&mut self, page_count: usize) -> bool {
        self.go_to(page_count, page_count)
    }

    /// Page-specific update function
    /// Returns: whether the current page changed
    pub fn update(&mut self, msg: PageMsg, page_count: usize) -> bool {
        match msg {
            PageMsg::GoTo(page) => self.go_to(page, page_count),
            PageMsg::Next => self.next(page_count),
            PageMsg::Prev => self.prev(page_count),
            PageMsg::First => self.first(page_count),
            PageMsg::Last => self.last(page_count),
        }
    }
}
