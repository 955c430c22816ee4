use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
