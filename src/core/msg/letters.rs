use serde::{Deserialize, Serialize};

use crate::domain::collections::LetterCollection;

/// Messages specific to LettersState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LettersMsg {
    /// Start fetching the viewer's letters
    Load,
    /// The fetch finished with an already-sorted collection
    Loaded(LetterCollection),
    /// The fetch failed; carries a human-readable reason
    LoadFailed(String),
}
