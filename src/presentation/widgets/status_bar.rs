use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::state::{AppState, LoadState};

pub struct StatusBarWidget<'a> {
    state: &'a AppState,
    viewer: &'a str,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState, viewer: &'a str) -> Self {
        Self { state, viewer }
    }

    /// One-line summary of where the gallery stands
    pub fn summary(&self) -> String {
        match self.state.letters.load_state() {
            LoadState::Loading => "loading...".to_string(),
            LoadState::Failed(_) => "load failed · r to retry".to_string(),
            LoadState::Loaded(letters) => {
                let page = self.state.gallery();
                let noun = if letters.len() == 1 { "letter" } else { "letters" };
                format!(
                    "page {}/{} · {} {noun}",
                    page.current_page.min(page.page_count),
                    page.page_count,
                    letters.len()
                )
            }
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [info, message] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let info_line = Line::from(vec![
            Span::styled(
                format!("To: {}", self.viewer),
                Style::default().fg(Color::Gray).italic(),
            ),
            Span::raw("  "),
            Span::styled(self.summary(), Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(info_line)
            .style(Style::default().bg(Color::Black))
            .render(info, buf);

        let text = self.state.system.status_message.clone().unwrap_or_default();
        let style = if text.starts_with("Error:") {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        Paragraph::new(text).style(style).render(message, buf);
    }
}
