use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::msg::{letters::LettersMsg, Msg},
    infrastructure::{loader::CollectionLoader, source::LetterSource},
};

/// Operations the runtime can ask of the letter service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterOperation {
    /// Fetch the viewer's letters and report back with `Letters(Loaded | LoadFailed)`
    Load,
}

/// Background task owning the data source
///
/// Fetches run one at a time in the order requested. Results come back to the
/// runtime as ordinary messages.
pub struct LetterService<S> {
    loader: CollectionLoader<S>,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<LetterOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    msg_tx: mpsc::UnboundedSender<Msg>,
}

pub type NewLetterService<S> = (
    mpsc::UnboundedSender<LetterOperation>, // op_tx - operations to send
    CancellationToken,                      // shutdown signal
    LetterService<S>,
);

impl<S> LetterService<S>
where
    S: LetterSource + 'static,
{
    pub fn new(loader: CollectionLoader<S>, msg_tx: mpsc::UnboundedSender<Msg>) -> NewLetterService<S> {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                loader,
                op_rx,
                cancel_token,
                msg_tx,
            },
        )
    }

    /// Run the service in a background task
    pub fn run(mut self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run_service().await })
    }

    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => {
                            if !self.handle_operation(op).await {
                                break;
                            }
                        }
                        None => {
                            log::debug!("LetterService: operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("LetterService received cancellation signal");
                    break;
                }
            }
        }
    }

    /// Returns false when the service should stop
    async fn handle_operation(&mut self, op: LetterOperation) -> bool {
        log::debug!("Handling LetterOperation: {op:?}");

        match op {
            LetterOperation::Load => {
                let result = tokio::select! {
                    result = self.loader.load() => result,
                    _ = self.cancel_token.cancelled() => {
                        log::info!("LetterService: fetch abandoned on shutdown");
                        return false;
                    }
                };

                let msg = match result {
                    Ok(letters) => LettersMsg::Loaded(letters),
                    Err(e) => {
                        log::error!("LetterService: fetch failed: {e}");
                        LettersMsg::LoadFailed(e.to_string())
                    }
                };
                // The runtime may already be gone during shutdown
                self.msg_tx.send(Msg::Letters(msg)).is_ok()
            }
        }
    }
}
