use serde::{Deserialize, Serialize};

use crate::domain::letter::LetterId;

/// Elm-like command definitions
/// Represents side effects (network fetches, timers, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Data source
    FetchLetters,

    // Hover-off debounce timer
    ScheduleHoverClear { id: LetterId },
    CancelHoverClear,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command completes later rather than immediately
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchLetters | Cmd::ScheduleHoverClear { .. } => true,
            Cmd::CancelHoverClear | Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }
}
