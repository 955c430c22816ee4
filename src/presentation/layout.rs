use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::{
    core::{msg::page::PageMsg, state::AppState},
    domain::pagination::PageSize,
    presentation::widgets::page_bar::PageBar,
};

/// Cells of a `columns`-wide grid holding `page_size` mailboxes, row-major
pub fn grid_cells(area: Rect, columns: u16, page_size: PageSize) -> Vec<Rect> {
    let slots = page_size.get();
    let columns = usize::from(columns.max(1)).min(slots);
    let rows = slots.div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(slots)
        .collect()
}

/// Screen geometry of the gallery, recomputed on every frame
///
/// The same geometry is used for drawing and for mouse hit-testing, so a
/// click always lands on the mailbox that was drawn under it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryLayout {
    pub grid: Rect,
    pub pager: Rect,
    pub status: Rect,
    pub cells: Vec<Rect>,
}

impl GalleryLayout {
    pub fn new(area: Rect, columns: u16, page_size: PageSize) -> Self {
        let [grid, pager, status] = Layout::vertical([
            Constraint::Min(0),    // Mailbox grid
            Constraint::Length(1), // Page bar
            Constraint::Length(2), // Status bar
        ])
        .areas(area);

        Self {
            grid,
            pager,
            status,
            cells: grid_cells(grid, columns, page_size),
        }
    }

    /// Index of the grid slot under the pointer
    pub fn slot_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cells.iter().position(|cell| cell.contains(position))
    }

    /// Page bar control under the pointer
    pub fn page_target_at(&self, state: &AppState, column: u16, row: u16) -> Option<PageMsg> {
        if !self.pager.contains(Position::new(column, row)) {
            return None;
        }
        PageBar::new(
            state.letters.as_slice().len(),
            state.page.page_size(),
            state.page.current_page(),
        )
        .target_at(self.pager, column)
    }
}
