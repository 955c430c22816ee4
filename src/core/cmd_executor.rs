use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        msg::{hover::HoverMsg, Msg},
    },
    domain::letter::LetterId,
    infrastructure::{debounce::Debouncer, letter_service::LetterOperation},
};

/// Debouncer that reports an expired hover back to the runtime
pub fn hover_clear_debouncer(
    delay: Duration,
    msg_tx: mpsc::UnboundedSender<Msg>,
) -> Debouncer<LetterId> {
    Debouncer::new(delay, move |id| {
        // Runtime already gone during shutdown
        let _ = msg_tx.send(Msg::Hover(HoverMsg::Expire(id)));
    })
}

/// Command executor that bridges Elm commands to the letter service and timers
#[derive(Debug, Default)]
pub struct CmdExecutor {
    letter_sender: Option<mpsc::UnboundedSender<LetterOperation>>,
    hover_clear: Option<Debouncer<LetterId>>,
}

impl CmdExecutor {
    /// Create a new command executor without any services (commands are logged and dropped)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor wired to the letter service and hover timer
    pub fn new_with_services(
        letter_sender: mpsc::UnboundedSender<LetterOperation>,
        hover_clear: Debouncer<LetterId>,
    ) -> Self {
        Self {
            letter_sender: Some(letter_sender),
            hover_clear: Some(hover_clear),
        }
    }

    pub fn set_letter_sender(&mut self, letter_sender: mpsc::UnboundedSender<LetterOperation>) {
        self.letter_sender = Some(letter_sender);
    }

    pub fn set_hover_debouncer(&mut self, hover_clear: Debouncer<LetterId>) {
        self.hover_clear = Some(hover_clear);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::FetchLetters => {
                if let Some(letter_sender) = &self.letter_sender {
                    letter_sender.send(LetterOperation::Load)?;
                } else {
                    log::warn!("FetchLetters ignored: LetterService not available");
                }
            }

            Cmd::ScheduleHoverClear { id } => {
                if let Some(hover_clear) = &self.hover_clear {
                    hover_clear.call(*id);
                } else {
                    log::warn!("ScheduleHoverClear ignored: no hover timer configured");
                }
            }

            Cmd::CancelHoverClear => {
                if let Some(hover_clear) = &self.hover_clear {
                    hover_clear.cancel();
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Drop any scheduled timer
    pub fn shutdown(&self) {
        if let Some(hover_clear) = &self.hover_clear {
            hover_clear.cancel();
        }
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_letter_sender: self.letter_sender.is_some(),
            is_letter_sender_closed: self.letter_sender.as_ref().map(|sender| sender.is_closed()),
            has_hover_timer: self.hover_clear.is_some(),
            is_hover_clear_pending: self
                .hover_clear
                .as_ref()
                .is_some_and(|hover_clear| hover_clear.is_pending()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_letter_sender: bool,
    pub is_letter_sender_closed: Option<bool>,
    pub has_hover_timer: bool,
    pub is_hover_clear_pending: bool,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::FetchLetters => "FetchLetters".to_string(),
            Cmd::ScheduleHoverClear { .. } => "ScheduleHoverClear".to_string(),
            Cmd::CancelHoverClear => "CancelHoverClear".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
        }
    }
}
