use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    core::{
        msg::{
            hover::HoverMsg, letters::LettersMsg, page::PageMsg, system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::letter::LetterId,
    presentation::layout::GalleryLayout,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState, layout: &GalleryLayout) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // User input
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state, layout),

        // The runner redraws with a fresh layout
        RawMsg::Resize(_, _) | RawMsg::Tick => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => vec![Msg::System(SystemMsg::Quit)],
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Char('q') => vec![Msg::System(SystemMsg::Quit)],
        KeyCode::Esc => match state.hover.hovered() {
            Some(_) => vec![Msg::Hover(HoverMsg::Clear)],
            None => vec![],
        },

        // Navigation
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => vec![Msg::Page(PageMsg::Prev)],
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            vec![Msg::Page(PageMsg::Next)]
        }
        KeyCode::Home | KeyCode::Char('g') => vec![Msg::Page(PageMsg::First)],
        KeyCode::End | KeyCode::Char('G') => vec![Msg::Page(PageMsg::Last)],
        KeyCode::Char(digit @ '1'..='9') => digit
            .to_digit(10)
            .map(|page| vec![Msg::Page(PageMsg::GoTo(page as usize))])
            .unwrap_or_default(),

        // A fetch is already in flight while loading
        KeyCode::Char('r') if state.letters.is_loading() => vec![],
        KeyCode::Char('r') => vec![Msg::Letters(LettersMsg::Load)],

        // Keyboard hover
        KeyCode::Tab => cycle_hover(state, true),
        KeyCode::BackTab => cycle_hover(state, false),
        KeyCode::Enter => state
            .hover
            .hovered()
            .map(|id| vec![Msg::OpenLetter(id)])
            .unwrap_or_default(),

        _ => vec![],
    }
}

/// Move the hover to the next (or previous) mailbox on the page, wrapping
fn cycle_hover(state: &AppState, forward: bool) -> Vec<Msg> {
    let ids: Vec<LetterId> = state.gallery().visible.iter().map(|l| l.id).collect();
    if ids.is_empty() {
        return vec![];
    }
    let current = state
        .hover
        .hovered()
        .and_then(|id| ids.iter().position(|&visible| visible == id));
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => ids.len() - 1,
        (Some(index), true) => (index + 1) % ids.len(),
        (Some(index), false) => (index + ids.len() - 1) % ids.len(),
    };
    vec![Msg::Hover(HoverMsg::Enter(ids[next]))]
}

fn letter_at(state: &AppState, layout: &GalleryLayout, column: u16, row: u16) -> Option<LetterId> {
    let slot = layout.slot_at(column, row)?;
    state.gallery().visible.get(slot).map(|letter| letter.id)
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState, layout: &GalleryLayout) -> Vec<Msg> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => {
            let under = letter_at(state, layout, column, row);
            match (under, state.hover.hovered()) {
                (Some(id), Some(hovered)) if id == hovered && !state.hover.is_leaving() => vec![],
                (Some(id), _) => vec![Msg::Hover(HoverMsg::Enter(id))],
                (None, Some(hovered)) => vec![Msg::Hover(HoverMsg::Leave(hovered))],
                (None, None) => vec![],
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = layout.page_target_at(state, column, row) {
                return vec![Msg::Page(target)];
            }
            letter_at(state, layout, column, row)
                .map(|id| vec![Msg::OpenLetter(id)])
                .unwrap_or_default()
        }
        MouseEventKind::ScrollDown => vec![Msg::Page(PageMsg::Next)],
        MouseEventKind::ScrollUp => vec![Msg::Page(PageMsg::Prev)],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;
    use rstest::rstest;

    use super::*;
    use crate::domain::{collections::LetterCollection, letter::Letter, pagination::PageSize};

    fn loaded(count: i64) -> AppState {
        let mut state = AppState::new(PageSize::DEFAULT);
        let letters: LetterCollection = (1..=count)
            .map(|i| Letter::new(i, format!("sender {i}"), format!("2023-08-{i:02}T00:00:00Z")))
            .collect();
        state.letters.update(LettersMsg::Loaded(letters));
        state
    }

    /// 80x23 screen: 4x2 grid of 20x10 cells, page bar on row 20
    fn layout() -> GalleryLayout {
        GalleryLayout::new(Rect::new(0, 0, 80, 23), 4, PageSize::DEFAULT)
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[rstest]
    #[case(KeyCode::Char('q'), vec![Msg::System(SystemMsg::Quit)])]
    #[case(KeyCode::Right, vec![Msg::Page(PageMsg::Next)])]
    #[case(KeyCode::Char('l'), vec![Msg::Page(PageMsg::Next)])]
    #[case(KeyCode::Left, vec![Msg::Page(PageMsg::Prev)])]
    #[case(KeyCode::Home, vec![Msg::Page(PageMsg::First)])]
    #[case(KeyCode::Char('G'), vec![Msg::Page(PageMsg::Last)])]
    #[case(KeyCode::Char('2'), vec![Msg::Page(PageMsg::GoTo(2))])]
    #[case(KeyCode::Char('0'), vec![])]
    #[case(KeyCode::Char('r'), vec![Msg::Letters(LettersMsg::Load)])]
    #[case(KeyCode::Esc, vec![])]
    #[case(KeyCode::Enter, vec![])]
    fn test_key_bindings(#[case] code: KeyCode, #[case] expected: Vec<Msg>) {
        let state = loaded(10);
        assert_eq!(translate_raw_to_domain(key(code), &state, &layout()), expected);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &AppState::default(), &layout()),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert!(translate_raw_to_domain(RawMsg::Key(event), &loaded(1), &layout()).is_empty());
    }

    #[test]
    fn test_reload_ignored_while_loading() {
        let state = AppState::default();
        assert!(translate_raw_to_domain(key(KeyCode::Char('r')), &state, &layout()).is_empty());
    }

    #[test]
    fn test_esc_and_enter_with_hover() {
        let mut state = loaded(10);
        state.hover.update(HoverMsg::Enter(9));
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state, &layout()),
            vec![Msg::Hover(HoverMsg::Clear)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state, &layout()),
            vec![Msg::OpenLetter(9)]
        );
    }

    #[test]
    fn test_tab_cycles_visible_letters() {
        // Page 1 shows 10, 9, ..., 3
        let mut state = loaded(10);
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state, &layout()),
            vec![Msg::Hover(HoverMsg::Enter(10))]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::BackTab), &state, &layout()),
            vec![Msg::Hover(HoverMsg::Enter(3))]
        );

        state.hover.update(HoverMsg::Enter(3));
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state, &layout()),
            vec![Msg::Hover(HoverMsg::Enter(10))]
        );
    }

    #[test]
    fn test_tab_on_empty_page() {
        assert!(translate_raw_to_domain(key(KeyCode::Tab), &loaded(0), &layout()).is_empty());
    }

    #[test]
    fn test_mouse_move_enters_and_leaves() {
        let mut state = loaded(10);
        let layout = layout();

        // Second cell of the first row holds letter 9
        let msgs = translate_raw_to_domain(mouse(MouseEventKind::Moved, 25, 5), &state, &layout);
        assert_eq!(msgs, vec![Msg::Hover(HoverMsg::Enter(9))]);

        state.hover.update(HoverMsg::Enter(9));
        let msgs = translate_raw_to_domain(mouse(MouseEventKind::Moved, 26, 5), &state, &layout);
        assert!(msgs.is_empty());

        let msgs = translate_raw_to_domain(mouse(MouseEventKind::Moved, 26, 21), &state, &layout);
        assert_eq!(msgs, vec![Msg::Hover(HoverMsg::Leave(9))]);

        // Coming back before the clear fires re-enters
        state.hover.update(HoverMsg::Leave(9));
        let msgs = translate_raw_to_domain(mouse(MouseEventKind::Moved, 25, 5), &state, &layout);
        assert_eq!(msgs, vec![Msg::Hover(HoverMsg::Enter(9))]);
    }

    #[test]
    fn test_mouse_over_placeholder_is_not_a_letter() {
        let mut state = loaded(10);
        state.page.update(PageMsg::Next, 2);
        let layout = layout();

        // Page 2 holds letters 2 and 1, slot 2 is a placeholder
        let msgs = translate_raw_to_domain(mouse(MouseEventKind::Moved, 45, 5), &state, &layout);
        assert!(msgs.is_empty());
        let msgs = translate_raw_to_domain(mouse(MouseEventKind::Moved, 5, 5), &state, &layout);
        assert_eq!(msgs, vec![Msg::Hover(HoverMsg::Enter(2))]);
    }

    #[test]
    fn test_click_opens_letter() {
        let state = loaded(10);
        let msgs = translate_raw_to_domain(
            mouse(MouseEventKind::Down(MouseButton::Left), 5, 15),
            &state,
            &layout(),
        );
        // First cell of the second row holds letter 6
        assert_eq!(msgs, vec![Msg::OpenLetter(6)]);
    }

    #[test]
    fn test_click_page_bar() {
        let state = loaded(10);
        // "« ‹ 1 2 › »" centered in 80 columns starts at x = 34
        let msgs = translate_raw_to_domain(
            mouse(MouseEventKind::Down(MouseButton::Left), 42, 20),
            &state,
            &layout(),
        );
        assert_eq!(msgs, vec![Msg::Page(PageMsg::Next)]);
    }

    #[test]
    fn test_scroll_pages() {
        let state = loaded(10);
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::ScrollDown, 0, 0), &state, &layout()),
            vec![Msg::Page(PageMsg::Next)]
        );
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::ScrollUp, 0, 0), &state, &layout()),
            vec![Msg::Page(PageMsg::Prev)]
        );
    }

    #[test]
    fn test_system_events() {
        let state = AppState::default();
        assert!(translate_raw_to_domain(RawMsg::Tick, &state, &layout()).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Resize(10, 10), &state, &layout()).is_empty());
        assert_eq!(
            translate_raw_to_domain(RawMsg::Error("boom".to_string()), &state, &layout()),
            vec![Msg::System(SystemMsg::ShowError("boom".to_string()))]
        );
    }
}
