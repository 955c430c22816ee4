use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use letterbox::{
    core::{
        cmd_executor::{hover_clear_debouncer, CmdExecutor},
        msg::letters::LettersMsg,
    },
    domain::{Letter, LetterCollection, PageSize},
    infrastructure::letter_service::LetterOperation,
    presentation::layout::GalleryLayout,
    AppState, GalleryRuntime, Msg, RawMsg,
};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

const DELAY: Duration = Duration::from_millis(300);

struct Harness {
    runtime: GalleryRuntime,
    layout: GalleryLayout,
    _op_rx: mpsc::UnboundedReceiver<LetterOperation>,
}

impl Harness {
    fn new() -> Self {
        let mut runtime = GalleryRuntime::new(AppState::new(PageSize::DEFAULT));
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let debouncer = hover_clear_debouncer(DELAY, runtime.sender());
        runtime.set_executor(CmdExecutor::new_with_services(op_tx, debouncer));

        let letters: LetterCollection = (1..=10)
            .map(|id| Letter::new(id, format!("Receiver {id}"), format!("2023-08-{id:02}")))
            .collect();
        runtime.send_msg(Msg::Letters(LettersMsg::Loaded(letters)));
        runtime.run_update_cycle().expect("executor configured");

        Self {
            runtime,
            layout: GalleryLayout::new(Rect::new(0, 0, 80, 23), 4, PageSize::DEFAULT),
            _op_rx: op_rx,
        }
    }

    fn move_to(&mut self, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.runtime.send_raw_msg(RawMsg::Mouse(mouse), &self.layout);
        self.runtime.run_update_cycle().expect("executor configured");
    }

    async fn wait(&mut self, duration: Duration) {
        tokio::time::advance(duration).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        self.runtime.run_update_cycle().expect("executor configured");
    }

    fn hovered(&self) -> Option<i64> {
        self.runtime.state().hover.hovered()
    }
}

// Cell 0 holds the newest letter (id 10), cell 1 the next (id 9)
const FIRST_CELL: (u16, u16) = (5, 5);
const SECOND_CELL: (u16, u16) = (25, 5);
// The page bar row, which is outside every mailbox
const OUTSIDE: (u16, u16) = (0, 20);

#[tokio::test(start_paused = true)]
async fn test_name_stays_until_delay_passes() {
    let mut harness = Harness::new();
    harness.move_to(FIRST_CELL.0, FIRST_CELL.1);
    assert_eq!(harness.hovered(), Some(10));

    harness.move_to(OUTSIDE.0, OUTSIDE.1);
    assert_eq!(harness.hovered(), Some(10));

    harness.wait(Duration::from_millis(299)).await;
    assert_eq!(harness.hovered(), Some(10));

    harness.wait(Duration::from_millis(1)).await;
    assert_eq!(harness.hovered(), None);
}

#[tokio::test(start_paused = true)]
async fn test_returning_cancels_clear() {
    let mut harness = Harness::new();
    harness.move_to(FIRST_CELL.0, FIRST_CELL.1);
    harness.move_to(OUTSIDE.0, OUTSIDE.1);
    harness.wait(Duration::from_millis(200)).await;

    harness.move_to(FIRST_CELL.0, FIRST_CELL.1);
    harness.wait(Duration::from_secs(1)).await;
    assert_eq!(harness.hovered(), Some(10));
}

#[tokio::test(start_paused = true)]
async fn test_moving_between_mailboxes_switches_immediately() {
    let mut harness = Harness::new();
    harness.move_to(FIRST_CELL.0, FIRST_CELL.1);
    harness.move_to(SECOND_CELL.0, SECOND_CELL.1);
    assert_eq!(harness.hovered(), Some(9));

    harness.wait(Duration::from_secs(1)).await;
    assert_eq!(harness.hovered(), Some(9));
}

#[tokio::test(start_paused = true)]
async fn test_jitter_outside_does_not_extend_delay() {
    let mut harness = Harness::new();
    harness.move_to(FIRST_CELL.0, FIRST_CELL.1);
    harness.move_to(OUTSIDE.0, OUTSIDE.1);
    harness.wait(Duration::from_millis(200)).await;

    // More motion outside any mailbox keeps the original deadline
    harness.move_to(OUTSIDE.0 + 1, OUTSIDE.1);
    harness.wait(Duration::from_millis(100)).await;
    assert_eq!(harness.hovered(), None);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_drops_pending_clear() {
    let mut harness = Harness::new();
    harness.move_to(FIRST_CELL.0, FIRST_CELL.1);
    harness.move_to(OUTSIDE.0, OUTSIDE.1);
    harness.runtime.shutdown();

    harness.wait(Duration::from_secs(1)).await;
    assert_eq!(harness.hovered(), Some(10));
}
