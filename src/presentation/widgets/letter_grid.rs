use chrono::{DateTime, TimeDelta, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use crate::{
    domain::{
        letter::{Letter, LetterId},
        pagination::{Page, PageSize, Slot},
        text::truncate_to_width,
    },
    presentation::layout::grid_cells,
};

const MAILBOX: &str = "✉";
const RECENT_MAILBOX: &str = "✦ ✉ ✦";
const UNNAMED: &str = "(no name)";

/// Grid of mailboxes for one page, padded with empty mailboxes
pub struct LetterGrid<'a> {
    page: Page<'a, Letter>,
    columns: u16,
    page_size: PageSize,
    hovered: Option<LetterId>,
    now: DateTime<Utc>,
    recent_window: TimeDelta,
}

impl<'a> LetterGrid<'a> {
    pub fn new(page: Page<'a, Letter>, columns: u16, page_size: PageSize) -> Self {
        Self {
            page,
            columns,
            page_size,
            hovered: None,
            now: Utc::now(),
            recent_window: TimeDelta::hours(24),
        }
    }

    pub fn hovered(mut self, hovered: Option<LetterId>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Letters newer than `now - window` are highlighted
    pub fn recent(mut self, now: DateTime<Utc>, window: TimeDelta) -> Self {
        self.now = now;
        self.recent_window = window;
        self
    }

    fn render_letter(&self, letter: &Letter, area: Rect, buf: &mut Buffer) {
        let is_hovered = self.hovered == Some(letter.id);
        let is_recent = letter.is_recent(self.now, self.recent_window);
        let name = if letter.receiver.is_empty() {
            UNNAMED
        } else {
            letter.receiver.as_str()
        };

        let block = Block::bordered().border_type(if is_hovered {
            BorderType::Thick
        } else {
            BorderType::Rounded
        });
        let block = if is_hovered {
            block.border_style(Style::default().fg(Color::Cyan))
        } else {
            block
        };

        let inner_width = usize::from(area.width.saturating_sub(2));
        let icon = if is_recent {
            Span::styled(RECENT_MAILBOX, Style::default().fg(Color::Yellow).bold())
        } else {
            Span::styled(MAILBOX, Style::default().fg(Color::Yellow))
        };
        // The full name is only revealed while hovered
        let name_line = if is_hovered {
            Line::from(Span::styled(name.to_string(), Style::default().bold()))
        } else {
            Line::from(Span::styled(
                truncate_to_width(name, inner_width),
                Style::default().fg(Color::Gray),
            ))
        };

        Paragraph::new(vec![Line::from(icon), name_line])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn render_placeholder(area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(Color::DarkGray);
        Paragraph::new(vec![Line::from(MAILBOX), Line::from("empty")])
            .style(dim)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(dim),
            )
            .render(area, buf);
    }
}

impl Widget for LetterGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let cells = grid_cells(area, self.columns, self.page_size);
        for (slot, cell) in self.page.slots().zip(cells) {
            match slot {
                Slot::Filled(letter) => self.render_letter(letter, cell, buf),
                Slot::Placeholder(_) => Self::render_placeholder(cell, buf),
            }
        }
    }
}
