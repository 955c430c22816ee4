use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::msg::page::PageMsg,
    domain::{
        pagination::{self, PageSize},
        text::center_offset,
    },
};

/// How many page numbers are listed around the current one
const WINDOW: usize = 5;

/// One clickable label of the page bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub target: PageMsg,
    pub label: String,
    pub is_current: bool,
}

/// `« ‹ 1 2 3 4 5 › »` navigation line under the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBar {
    total: usize,
    page_size: PageSize,
    current_page: usize,
    page_count: usize,
}

impl PageBar {
    /// `total` is the number of letters, not pages
    pub fn new(total: usize, page_size: PageSize, current_page: usize) -> Self {
        Self {
            total,
            page_size,
            current_page,
            page_count: pagination::page_count(total, page_size),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Range of page numbers to list, at most [`WINDOW`] wide
    pub fn window(&self) -> std::ops::RangeInclusive<usize> {
        if self.page_count == 0 {
            return 1..=0;
        }
        let current = self.current_page.clamp(1, self.page_count);
        let end = current
            .saturating_add(WINDOW / 2)
            .max(WINDOW)
            .min(self.page_count);
        let start = end.saturating_sub(WINDOW - 1).max(1);
        start..=end
    }

    pub fn segments(&self) -> Vec<Segment> {
        if self.page_count == 0 {
            return vec![];
        }
        let arrow = |label: &str, target| Segment {
            target,
            label: label.to_string(),
            is_current: false,
        };

        let mut segments = vec![arrow("«", PageMsg::First), arrow("‹", PageMsg::Prev)];
        segments.extend(self.window().map(|page| Segment {
            target: PageMsg::GoTo(page),
            label: page.to_string(),
            is_current: page == self.current_page,
        }));
        segments.push(arrow("›", PageMsg::Next));
        segments.push(arrow("»", PageMsg::Last));
        segments
    }

    /// Segments with their starting column inside `area`
    fn placed(&self, area: Rect) -> Vec<(u16, Segment)> {
        let segments = self.segments();
        let total: usize = segments
            .iter()
            .map(|segment| segment.label.width() + 1)
            .sum::<usize>()
            .saturating_sub(1);
        let offset = area.width.saturating_sub(total as u16) / 2;

        let mut x = area.x.saturating_add(offset);
        let mut placed = Vec::with_capacity(segments.len());
        for segment in segments {
            let width = segment.label.width() as u16;
            placed.push((x, segment));
            x = x.saturating_add(width + 1);
        }
        placed
    }

    /// Navigation target under `column`, if any
    pub fn target_at(&self, area: Rect, column: u16) -> Option<PageMsg> {
        self.placed(area).into_iter().find_map(|(x, segment)| {
            let width = segment.label.width() as u16;
            (x..x.saturating_add(width))
                .contains(&column)
                .then_some(segment.target)
        })
    }
}

impl Widget for PageBar {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.is_empty() || self.page_count == 0 {
            return;
        }

        let right = area.x.saturating_add(area.width);
        for (x, segment) in self.placed(area) {
            if x >= right {
                break;
            }
            let style = if segment.is_current {
                Style::default().reversed().bold()
            } else if matches!(segment.target, PageMsg::GoTo(_)) {
                Style::default()
            } else {
                Style::default().fg(Color::Gray)
            };
            buf.set_stringn(x, area.y, &segment.label, usize::from(right - x), style);
        }
    }
}

/// Left padding for a centered single-line message, shared with the view
pub fn centered_x(area: Rect, text: &str) -> u16 {
    area.x
        .saturating_add(center_offset(text, usize::from(area.width)) as u16)
}
