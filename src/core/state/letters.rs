use crate::{
    core::{cmd::Cmd, msg::letters::LettersMsg},
    domain::{collections::LetterCollection, letter::Letter},
};

/// Where the initial fetch stands
///
/// "Still loading" and "failed" are distinct so a failed fetch is never
/// mistaken for an empty mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(LetterCollection),
    Failed(String),
}

/// Letters-related state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LettersState {
    load: LoadState,
}

impl LettersState {
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn collection(&self) -> Option<&LetterCollection> {
        match &self.load {
            LoadState::Loaded(letters) => Some(letters),
            _ => None,
        }
    }

    /// Loaded letters in display order, empty until the fetch succeeds
    pub fn as_slice(&self) -> &[Letter] {
        self.collection()
            .map(LetterCollection::as_slice)
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Letters-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: LettersMsg) -> Vec<Cmd> {
        match msg {
            LettersMsg::Load => {
                self.load = LoadState::Loading;
                vec![Cmd::FetchLetters]
            }

            LettersMsg::Loaded(letters) => {
                let message = format!("Loaded {} letters", letters.len());
                self.load = LoadState::Loaded(letters);
                vec![Cmd::LogInfo { message }]
            }

            LettersMsg::LoadFailed(reason) => {
                let message = format!("Failed to load letters: {reason}");
                self.load = LoadState::Failed(reason);
                vec![Cmd::LogError { message }]
            }
        }
    }
}
