use crate::{
    core::{cmd::Cmd, msg::system::SystemMsg},
    domain::letter::LetterId,
};

/// System-related state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Last mailbox the viewer opened
    pub opened: Option<LetterId>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message.replace('\n', " "));
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {}", error.replace('\n', " ")));
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_status_message_is_single_line() {
        let mut system = SystemState::default();
        system.update(SystemMsg::UpdateStatusMessage("two\nlines".to_string()));
        assert_eq!(system.status_message, Some("two lines".to_string()));

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message, None);
    }

    #[test]
    fn test_show_error() {
        let mut system = SystemState::default();
        system.update(SystemMsg::ShowError("offline".to_string()));
        assert_eq!(system.status_message, Some("Error: offline".to_string()));
    }
}
