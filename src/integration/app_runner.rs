use chrono::Utc;
use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd_executor::{hover_clear_debouncer, CmdExecutor},
        msg::{letters::LettersMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        letter_service::LetterService,
        loader::CollectionLoader,
        source::LetterSource,
        tui::{Event, TuiLike},
    },
    integration::runtime::GalleryRuntime,
    presentation::{layout::GalleryLayout, view::GalleryView},
};

/// Drives the gallery: terminal events in, frames out
pub struct AppRunner {
    runtime: GalleryRuntime,
    view: GalleryView,
    tui: Box<dyn TuiLike>,
    revision_rx: watch::Receiver<u64>,
    // Geometry of the last frame, used to hit-test mouse input
    layout: GalleryLayout,
    needs_redraw: bool,
    service_token: CancellationToken,
    service_handle: Option<JoinHandle<()>>,
}

impl AppRunner {
    /// Wire the runtime, the letter service and the hover timer around `source`
    ///
    /// Must be called inside a tokio runtime since the letter service starts
    /// right away.
    pub fn new<S>(config: &Config, source: S, tui: Box<dyn TuiLike>) -> Result<Self>
    where
        S: LetterSource + 'static,
    {
        let gallery = &config.gallery;
        let mut runtime = GalleryRuntime::new(AppState::new(gallery.page_size));

        let loader = CollectionLoader::new(
            source,
            config.backend.table.clone(),
            config.backend.recipient_column.clone(),
            config.viewer.clone(),
        );
        let (letter_tx, service_token, letter_service) =
            LetterService::new(loader, runtime.sender());
        let service_handle = letter_service.run();

        let hover_clear = hover_clear_debouncer(gallery.hover_clear_delay(), runtime.sender());
        runtime.set_executor(CmdExecutor::new_with_services(letter_tx, hover_clear));

        let view = GalleryView::new(
            gallery.columns,
            gallery.page_size,
            gallery.recent_window(),
            config.viewer.clone(),
        );
        let revision_rx = runtime.subscribe();

        Ok(Self {
            runtime,
            view,
            tui,
            revision_rx,
            layout: GalleryLayout::default(),
            needs_redraw: true,
            service_token,
            service_handle: Some(service_handle),
        })
    }

    pub fn runtime(&self) -> &GalleryRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut GalleryRuntime {
        &mut self.runtime
    }

    /// Run until the user quits or the terminal closes
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.runtime.send_msg(Msg::Letters(LettersMsg::Load));
        self.update();
        self.render()?;

        loop {
            tokio::select! {
                biased;

                Some(msg) = self.runtime.next_external() => {
                    self.runtime.send_msg(msg);
                }

                event = self.tui.next() => match event {
                    Some(event) => self.handle_event(event)?,
                    None => {
                        log::info!("Terminal event stream ended");
                        break;
                    }
                },
            }

            self.update();
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.shutdown().await;
        self.tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit, &self.layout),
            Event::Error => self.runtime.send_raw_msg(
                RawMsg::Error("terminal input error".to_string()),
                &self.layout,
            ),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick, &self.layout),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key), &self.layout),
            Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse), &self.layout),
            Event::Resize(w, h) => {
                self.tui.resize(Rect::new(0, 0, w, h))?;
                self.runtime.send_raw_msg(RawMsg::Resize(w, h), &self.layout);
                self.needs_redraw = true;
                self.render()?;
            }
            Event::Render => {
                let changed = self.revision_rx.has_changed().unwrap_or(false);
                if changed || self.needs_redraw {
                    self.render()?;
                }
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
        }
    }

    fn render(&mut self) -> Result<()> {
        self.revision_rx.borrow_and_update();
        let state = self.runtime.state();
        let view = &self.view;
        let now = Utc::now();
        let mut drawn = None;
        self.tui.draw(&mut |frame| {
            view.render(frame, state, now);
            drawn = Some(view.layout(frame.area()));
        })?;
        if let Some(layout) = drawn {
            self.layout = layout;
        }
        self.needs_redraw = false;
        Ok(())
    }

    async fn shutdown(&mut self) {
        self.runtime.shutdown();
        self.service_token.cancel();
        if let Some(handle) = self.service_handle.take() {
            if let Err(e) = handle.await {
                log::error!("Letter service ended abnormally: {e}");
            }
        }
    }
}
