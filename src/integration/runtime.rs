use std::collections::VecDeque;

use tokio::sync::{mpsc, watch};

use crate::{
    core::{
        cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    presentation::layout::GalleryLayout,
};

/// Owns `AppState` and drives messages through `update`
///
/// Messages come from two places: the terminal (translated on arrival) and
/// background work such as the letter service or the hover timer, which post
/// into the channel handed out by [`GalleryRuntime::sender`]. Every state
/// change bumps a revision counter that renderers can watch.
pub struct GalleryRuntime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: Option<CmdExecutor>,
    revision: watch::Sender<u64>,
}

impl GalleryRuntime {
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (revision, _) = watch::channel(0);

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor: None,
            revision,
        }
    }

    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    pub fn executor(&self) -> Option<&CmdExecutor> {
        self.cmd_executor.as_ref()
    }

    /// Channel for messages produced off the update loop
    pub fn sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Observe state changes; the value is bumped once per changing message
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Translate terminal input against the state and layout it was aimed at
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg, layout: &GalleryLayout) {
        if !raw_msg.is_frequent() {
            log::debug!("RawMsg: {raw_msg:?}");
        }
        let msgs = translate_raw_to_domain(raw_msg, &self.state, layout);
        self.msg_queue.extend(msgs);
    }

    /// Wait for the next message from background work
    pub async fn next_external(&mut self) -> Option<Msg> {
        self.msg_rx.recv().await
    }

    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        let Some(executor) = &self.cmd_executor else {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }
        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Msg: {msg:?}");
        }
        let (new_state, commands) = update(msg, self.state.clone());
        if new_state != self.state {
            self.state = new_state;
            self.revision.send_modify(|revision| *revision = revision.wrapping_add(1));
        }
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process queued messages, then whatever background work has posted
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn shutdown(&self) {
        if let Some(executor) = &self.cmd_executor {
            executor.shutdown();
        }
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            letter_count: self.state.letters.as_slice().len(),
            current_page: self.state.page.current_page(),
            page_count: self.state.page_count(),
            hovered: self.state.hover.hovered(),
            has_executor: self.cmd_executor.is_some(),
            revision: self.revision(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub letter_count: usize,
    pub current_page: usize,
    pub page_count: usize,
    pub hovered: Option<crate::domain::letter::LetterId>,
    pub has_executor: bool,
    pub revision: u64,
}
