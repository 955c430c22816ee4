use serde::{Deserialize, Serialize};

pub mod hover;
pub mod letters;
pub mod page;
pub mod system;

use crate::domain::letter::LetterId;
use hover::HoverMsg;
use letters::LettersMsg;
use page::PageMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and never perform I/O themselves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Collection loading (delegated to LettersState)
    Letters(LettersMsg),

    // Navigation (delegated to PageState)
    Page(PageMsg),

    // Name reveal (delegated to HoverState)
    Hover(HoverMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),

    /// Activate a mailbox on the current page
    OpenLetter(LetterId),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Hover(hover) => hover.is_frequent(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Hover(HoverMsg::Enter(1)).is_frequent());
        assert!(!Msg::Page(PageMsg::Next).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::Page(PageMsg::Next), Msg::Page(PageMsg::Next));
        assert_ne!(Msg::Page(PageMsg::Next), Msg::Page(PageMsg::Prev));
        assert_ne!(Msg::OpenLetter(1), Msg::OpenLetter(2));
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::Letters(LettersMsg::LoadFailed("timeout".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
