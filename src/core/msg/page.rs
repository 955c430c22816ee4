use serde::{Deserialize, Serialize};

/// Navigation messages for PageState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMsg {
    /// Jump to a 1-based page number
    GoTo(usize),
    Next,
    Prev,
    First,
    Last,
}
