use serde::{Deserialize, Serialize};

use crate::domain::letter::LetterId;

/// Hover messages for HoverState
///
/// `Enter` takes effect immediately. `Leave` only schedules a delayed
/// `Expire`, so moving between mailboxes does not flicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMsg {
    Enter(LetterId),
    Leave(LetterId),
    /// Delivered by the debounce timer after a `Leave`
    Expire(LetterId),
    Clear,
}

impl HoverMsg {
    /// Pointer motion produces these at a high rate
    pub fn is_frequent(&self) -> bool {
        matches!(self, HoverMsg::Enter(_) | HoverMsg::Leave(_))
    }
}
