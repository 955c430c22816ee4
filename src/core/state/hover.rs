use crate::{
    core::{cmd::Cmd, msg::hover::HoverMsg},
    domain::letter::LetterId,
};

/// Which mailbox currently reveals its sender name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Option<LetterId>,
    /// A hover-off clear is scheduled for `hovered`
    leaving: bool,
}

impl HoverState {
    pub fn hovered(&self) -> Option<LetterId> {
        self.hovered
    }

    pub fn is_hovered(&self, id: LetterId) -> bool {
        self.hovered == Some(id)
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    /// Hover-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: HoverMsg) -> Vec<Cmd> {
        match msg {
            // Hover-on is immediate and supersedes a pending clear
            HoverMsg::Enter(id) => {
                self.hovered = Some(id);
                self.leaving = false;
                vec![Cmd::CancelHoverClear]
            }

            // Hover-off waits for the debounce timer
            HoverMsg::Leave(id) => {
                if self.is_hovered(id) && !self.leaving {
                    self.leaving = true;
                    vec![Cmd::ScheduleHoverClear { id }]
                } else {
                    vec![]
                }
            }

            // Only a clear that is still wanted; a re-enter may race the timer
            HoverMsg::Expire(id) => {
                if self.is_hovered(id) && self.leaving {
                    self.hovered = None;
                    self.leaving = false;
                }
                vec![]
            }

            HoverMsg::Clear => {
                self.hovered = None;
                self.leaving = false;
                vec![Cmd::CancelHoverClear]
            }
        }
    }
}
