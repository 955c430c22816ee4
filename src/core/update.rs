use crate::{
    core::cmd::Cmd,
    core::msg::{hover::HoverMsg, page::PageMsg, system::SystemMsg, Msg},
    core::state::{AppState, LoadState},
    domain::letter::read_route,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Letters messages (delegated to LettersState)
        Msg::Letters(letters_msg) => {
            let mut commands = state.letters.update(letters_msg);
            let status = match state.letters.load_state() {
                LoadState::Loading => SystemMsg::UpdateStatusMessage("Loading letters...".to_string()),
                LoadState::Loaded(letters) if letters.is_empty() => {
                    SystemMsg::UpdateStatusMessage("No letters yet".to_string())
                }
                LoadState::Loaded(letters) => {
                    SystemMsg::UpdateStatusMessage(format!("Loaded {} letters", letters.len()))
                }
                LoadState::Failed(reason) => {
                    SystemMsg::ShowError(format!("could not load letters ({reason})"))
                }
            };
            commands.extend(state.system.update(status));

            // A reload may shrink the collection under the current page;
            // Loading and Failed hold no rows and must not move it
            if matches!(state.letters.load_state(), LoadState::Loaded(_)) {
                let page_count = state.page_count();
                let current_page = state.page.current_page();
                if state.page.update(PageMsg::GoTo(current_page), page_count) {
                    commands.extend(state.hover.update(HoverMsg::Clear));
                }
            }
            (state, commands)
        }

        // Page messages (delegated to PageState)
        Msg::Page(page_msg) => {
            let page_count = state.page_count();
            if state.page.update(page_msg, page_count) {
                // A hovered mailbox is no longer on screen
                let commands = state.hover.update(HoverMsg::Clear);
                (state, commands)
            } else {
                (state, vec![])
            }
        }

        // Hover messages (delegated to HoverState)
        Msg::Hover(hover_msg) => {
            if let HoverMsg::Enter(id) = hover_msg {
                if state.visible_letter(id).is_none() {
                    return (state, vec![]);
                }
            }
            let commands = state.hover.update(hover_msg);
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::OpenLetter(id) => {
            if state.visible_letter(id).is_none() {
                return (state, vec![]);
            }
            let route = read_route(id);
            state.system.opened = Some(id);
            let mut commands = state
                .system
                .update(SystemMsg::UpdateStatusMessage(format!("[Open] {route}")));
            commands.push(Cmd::LogInfo {
                message: format!("Opening letter {id} at {route}"),
            });
            (state, commands)
        }
    }
}
