use crate::domain::{
    letter::{Letter, LetterId},
    pagination::{paginate, Page, PageSize},
};

mod hover;
mod letters;
mod page;
mod system;

pub use hover::HoverState;
pub use letters::{LettersState, LoadState};
pub use page::PageState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub letters: LettersState,
    pub page: PageState,
    pub hover: HoverState,
    pub system: SystemState,
}

impl AppState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: PageState::new(page_size),
            ..Default::default()
        }
    }

    /// The page currently on screen, recomputed from the loaded letters
    pub fn gallery(&self) -> Page<'_, Letter> {
        paginate(
            self.letters.as_slice(),
            self.page.page_size(),
            self.page.current_page(),
        )
    }

    pub fn page_count(&self) -> usize {
        self.gallery().page_count
    }

    /// A letter shown on the current page
    pub fn visible_letter(&self, id: LetterId) -> Option<&Letter> {
        self.gallery().visible.iter().find(|letter| letter.id == id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{letters::LettersMsg, page::PageMsg},
        domain::collections::LetterCollection,
    };

    fn loaded(count: i64) -> AppState {
        let mut state = AppState::new(PageSize::DEFAULT);
        let letters: LetterCollection = (1..=count)
            .map(|i| Letter::new(i, format!("sender {i}"), format!("2023-08-{i:02}T00:00:00Z")))
            .collect();
        state.letters.update(LettersMsg::Loaded(letters));
        state
    }

    #[test]
    fn test_gallery_while_loading() {
        let state = AppState::default();
        let page = state.gallery();
        assert_eq!(page.page_count, 0);
        assert!(page.visible.is_empty());
        assert_eq!(page.placeholders, 0);
    }

    #[test]
    fn test_gallery_follows_page_state() {
        let mut state = loaded(10);
        let first = state.gallery();
        assert_eq!(first.visible.len(), 8);
        assert_eq!(first.visible[0].id, 10);
        assert_eq!(first.placeholders, 0);

        let count = state.page_count();
        state.page.update(PageMsg::Next, count);
        let second = state.gallery();
        let ids: Vec<_> = second.visible.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(second.placeholders, 6);
    }

    #[test]
    fn test_visible_letter() {
        let state = loaded(10);
        assert!(state.visible_letter(10).is_some());
        assert!(state.visible_letter(1).is_none());
    }
}
