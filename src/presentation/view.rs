use chrono::{DateTime, TimeDelta, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::{
    core::state::{AppState, LoadState},
    domain::pagination::PageSize,
    presentation::{
        layout::GalleryLayout,
        widgets::{
            letter_grid::LetterGrid,
            page_bar::{centered_x, PageBar},
            status_bar::StatusBarWidget,
        },
    },
};

/// Draws the whole gallery screen from `AppState`
#[derive(Debug, Clone)]
pub struct GalleryView {
    columns: u16,
    page_size: PageSize,
    recent_window: TimeDelta,
    viewer: String,
}

impl GalleryView {
    pub fn new(
        columns: u16,
        page_size: PageSize,
        recent_window: TimeDelta,
        viewer: impl Into<String>,
    ) -> Self {
        Self {
            columns,
            page_size,
            recent_window,
            viewer: viewer.into(),
        }
    }

    pub fn layout(&self, area: Rect) -> GalleryLayout {
        GalleryLayout::new(area, self.columns, self.page_size)
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState, now: DateTime<Utc>) {
        let area = frame.area();
        self.render_to(area, frame.buffer_mut(), state, now);
    }

    pub fn render_to(&self, area: Rect, buf: &mut Buffer, state: &AppState, now: DateTime<Utc>) {
        let layout = self.layout(area);

        match state.letters.load_state() {
            LoadState::Loading => notice(layout.grid, buf, "Loading letters...", Style::default()),
            LoadState::Failed(reason) => {
                let text = format!("Could not load letters: {reason}\n\nPress r to retry");
                Paragraph::new(text)
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(Block::bordered().title(" Error "))
                    .render(layout.grid, buf);
            }
            LoadState::Loaded(letters) if letters.is_empty() => notice(
                layout.grid,
                buf,
                "No letters yet",
                Style::default().fg(Color::DarkGray),
            ),
            LoadState::Loaded(letters) => {
                LetterGrid::new(state.gallery(), self.columns, self.page_size)
                    .hovered(state.hover.hovered())
                    .recent(now, self.recent_window)
                    .render(layout.grid, buf);
                PageBar::new(letters.len(), self.page_size, state.page.current_page())
                    .render(layout.pager, buf);
            }
        }

        StatusBarWidget::new(state, &self.viewer).render(layout.status, buf);
    }
}

/// Single centered line in the middle of `area`
fn notice(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    let y = area.y + area.height / 2;
    buf.set_stringn(
        centered_x(area, text),
        y,
        text,
        usize::from(area.width),
        style,
    );
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{
        core::msg::letters::LettersMsg,
        domain::{collections::LetterCollection, letter::Letter},
    };

    fn view() -> GalleryView {
        GalleryView::new(4, PageSize::DEFAULT, TimeDelta::hours(24), "Mina")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0)
            .single()
            .expect("valid date")
    }

    fn draw(state: &AppState) -> String {
        let area = Rect::new(0, 0, 80, 23);
        let mut buf = Buffer::empty(area);
        view().render_to(area, &mut buf, state, now());
        buf.content()
            .chunks(80)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_screen() {
        let text = draw(&AppState::default());
        assert!(text.contains("Loading letters..."));
        assert!(text.contains("To: Mina"));
    }

    #[test]
    fn test_failed_screen_is_not_empty_screen() {
        let mut state = AppState::default();
        state
            .letters
            .update(LettersMsg::LoadFailed("status 503".to_string()));
        let text = draw(&state);
        assert!(text.contains("Could not load letters: status 503"));
        assert!(text.contains("Press r to retry"));
        assert!(!text.contains("No letters yet"));
    }

    #[test]
    fn test_empty_screen() {
        let mut state = AppState::default();
        state
            .letters
            .update(LettersMsg::Loaded(LetterCollection::new()));
        let text = draw(&state);
        assert!(text.contains("No letters yet"));
        assert!(!text.contains('«'));
    }

    #[test]
    fn test_gallery_screen() {
        let mut state = AppState::default();
        let letters: LetterCollection = (1..=10)
            .map(|i| Letter::new(i, format!("sender{i}"), format!("2023-08-{i:02}")))
            .collect();
        state.letters.update(LettersMsg::Loaded(letters));

        let text = draw(&state);
        assert!(text.contains("sender10"));
        assert!(text.contains("sender3"));
        assert!(!text.contains("sender2"));
        assert!(text.contains("« ‹ 1 2 › »"));
        assert!(text.contains("page 1/2 · 10 letters"));
    }
}
