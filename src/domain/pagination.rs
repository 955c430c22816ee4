//! Client-side pagination over an already-sorted collection
//!
//! Everything here is a pure function of `(items, page_size, current_page)`.
//! Pages are 1-based. An empty collection has zero pages, and asking for a
//! page outside `1..=page_count` yields an empty slice rather than an error.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of items per page, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size must be greater than zero")]
pub struct ZeroPageSize;

impl PageSize {
    /// Two rows of four mailboxes
    pub const DEFAULT: PageSize = match NonZeroUsize::new(8) {
        Some(size) => PageSize(size),
        None => unreachable!(),
    };

    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ZeroPageSize;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size).ok_or(ZeroPageSize)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// `ceil(len / page_size)`, which is 0 for an empty collection
pub fn page_count(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Empty slots needed to complete the grid on `current_page`
///
/// Nonzero only on the last page, and only when `len` is not a multiple of
/// the page size.
pub fn placeholder_count(len: usize, page_size: PageSize, current_page: usize) -> usize {
    let pages = page_count(len, page_size);
    if pages == 0 || current_page != pages {
        return 0;
    }
    let size = page_size.get();
    (size - len % size) % size
}

/// Index range of `current_page` within a collection of `len` items
///
/// Out-of-range pages, including page 0, map to an empty range at `len`.
pub fn page_bounds(len: usize, page_size: PageSize, current_page: usize) -> (usize, usize) {
    let size = page_size.get();
    let offset = current_page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(size));
    match offset {
        Some(start) if start < len => (start, start.saturating_add(size).min(len)),
        _ => (len, len),
    }
}

/// One slot of the rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a, T> {
    Filled(&'a T),
    /// Empty mailbox; the index is stable within the page (0-based)
    Placeholder(usize),
}

/// The derived view of one page
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub placeholders: usize,
    pub page_count: usize,
    pub current_page: usize,
}

// Manual impls: derives would needlessly require `T: Clone`/`T: Copy`.
impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<'a, T> Page<'a, T> {
    pub fn is_last(&self) -> bool {
        self.page_count > 0 && self.current_page == self.page_count
    }

    /// Visible items followed by placeholders, in grid order
    pub fn slots(&self) -> impl Iterator<Item = Slot<'a, T>> + 'a {
        let visible = self.visible;
        visible
            .iter()
            .map(Slot::Filled)
            .chain((0..self.placeholders).map(Slot::Placeholder))
    }

    pub fn slot_count(&self) -> usize {
        self.visible.len() + self.placeholders
    }
}

/// Slice `items` into the page at `current_page`
pub fn paginate<T>(items: &[T], page_size: PageSize, current_page: usize) -> Page<'_, T> {
    let (start, end) = page_bounds(items.len(), page_size, current_page);
    Page {
        visible: &items[start..end],
        placeholders: placeholder_count(items.len(), page_size, current_page),
        page_count: page_count(items.len(), page_size),
        current_page,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).expect("non-zero page size")
    }

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert_eq!(PageSize::new(0), None);
        assert_eq!(PageSize::try_from(0), Err(ZeroPageSize));
        assert_eq!(PageSize::try_from(3).map(PageSize::get), Ok(3));
        assert_eq!(PageSize::default().get(), 8);
    }

    #[test]
    fn test_page_size_serde() -> serde_json::Result<()> {
        let parsed: PageSize = serde_json::from_str("12")?;
        assert_eq!(parsed.get(), 12);
        assert!(serde_json::from_str::<PageSize>("0").is_err());
        assert_eq!(serde_json::to_string(&parsed)?, "12");
        Ok(())
    }

    #[test]
    fn test_ten_items_page_size_eight() {
        let all = items(10);

        let first = paginate(&all, size(8), 1);
        assert_eq!(first.visible, &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(first.placeholders, 0);
        assert_eq!(first.page_count, 2);
        assert!(!first.is_last());

        let second = paginate(&all, size(8), 2);
        assert_eq!(second.visible, &[9, 10]);
        assert_eq!(second.placeholders, 6);
        assert_eq!(second.page_count, 2);
        assert!(second.is_last());
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let all: Vec<usize> = Vec::new();
        let page = paginate(&all, size(8), 1);
        assert_eq!(page.page_count, 0);
        assert!(page.visible.is_empty());
        assert_eq!(page.placeholders, 0);
        assert!(!page.is_last());
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(100)]
    #[case(usize::MAX)]
    fn test_out_of_range_page_is_empty(#[case] current_page: usize) {
        let all = items(10);
        let page = paginate(&all, size(8), current_page);
        assert!(page.visible.is_empty());
        assert_eq!(page.placeholders, 0);
        assert_eq!(page.page_count, 2);
    }

    #[rstest]
    #[case(0, 8, 0)]
    #[case(1, 8, 1)]
    #[case(8, 8, 1)]
    #[case(9, 8, 2)]
    #[case(16, 8, 2)]
    #[case(17, 8, 3)]
    #[case(5, 1, 5)]
    fn test_page_count(#[case] len: usize, #[case] page_size: usize, #[case] expected: usize) {
        assert_eq!(page_count(len, size(page_size)), expected);
    }

    #[rstest]
    #[case(10, 8, 2, 6)]
    #[case(10, 8, 1, 0)]
    #[case(16, 8, 2, 0)]
    #[case(1, 8, 1, 7)]
    #[case(7, 3, 3, 2)]
    #[case(0, 8, 1, 0)]
    #[case(0, 8, 0, 0)]
    fn test_placeholder_count(
        #[case] len: usize,
        #[case] page_size: usize,
        #[case] current_page: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(placeholder_count(len, size(page_size), current_page), expected);
    }

    #[test]
    fn test_pages_partition_the_collection() {
        for len in 0..40 {
            for page_size in 1..10 {
                let all = items(len);
                let page_size = size(page_size);
                let pages = page_count(len, page_size);

                let mut seen = Vec::new();
                for current_page in 1..=pages {
                    let page = paginate(&all, page_size, current_page);
                    assert!(page.visible.len() <= page_size.get());
                    seen.extend_from_slice(page.visible);
                }
                assert_eq!(seen, all, "len={len} page_size={page_size:?}");
            }
        }
    }

    #[test]
    fn test_placeholders_only_fill_last_page() {
        for len in 1..40 {
            for page_size in 1..10 {
                let all = items(len);
                let page_size = size(page_size);
                let pages = page_count(len, page_size);
                for current_page in 1..=pages {
                    let page = paginate(&all, page_size, current_page);
                    let remainder = len % page_size.get();
                    if current_page == pages && remainder != 0 {
                        assert_eq!(page.placeholders, page_size.get() - remainder);
                        assert_eq!(page.slot_count(), page_size.get());
                    } else {
                        assert_eq!(page.placeholders, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_slots_order() {
        let all = items(10);
        let page = paginate(&all, size(4), 3);
        let slots: Vec<_> = page.slots().collect();
        assert_eq!(
            slots,
            vec![
                Slot::Filled(&9),
                Slot::Filled(&10),
                Slot::Placeholder(0),
                Slot::Placeholder(1),
            ]
        );
    }
}
