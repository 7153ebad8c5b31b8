use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent,
};
use reviewer_client::{perform, ChartOpener, Completion, Effect, ReviewApi};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::AppResult;

#[derive(Clone, Debug)]
pub enum Event {
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    /// A network call made on the page's behalf has finished.
    Completion(Completion),
}

/// Terminal event-handler.
///
/// Terminal input, ticks and finished network calls all arrive through the one queue, so
/// the page is only ever touched by one handler at a time.
///
/// See [ratatui
/// example](https://github.com/ratatui/templates/blob/main/simple-async/src/event.rs);
#[derive(Debug)]
pub struct EventHandler {
    sx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    handler: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`].
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sx, rx) = mpsc::unbounded_channel();
        let _sx = sx.clone();

        let handler = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);

            loop {
                let tick_delay = tick.tick();
                let crossterm_event = reader.next().fuse();

                let event = tokio::select! {
                    // break when receiver closes
                    _ = _sx.closed() => {
                        break;
                    }

                    // continue to tick
                    _ = tick_delay => Event::Tick,

                    // handle user input
                    Some(Ok(event)) = crossterm_event => match event {
                        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                        CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                        CrosstermEvent::Resize(x, y) => Event::Resize(x, y),
                        _ => continue,
                    }
                };

                if _sx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { sx, rx, handler }
    }

    /// Run each effect on its own task; whatever they produce comes back as
    /// [`Event::Completion`].
    ///
    /// Nothing is cancelled, so replies can arrive out of order.
    pub fn dispatch<A, O>(&self, api: &Arc<A>, opener: &Arc<O>, effects: Vec<Effect>)
    where
        A: ReviewApi + 'static,
        O: ChartOpener + 'static,
    {
        for effect in effects {
            let api = api.clone();
            let opener = opener.clone();
            let sx = self.sx.clone();
            tokio::spawn(async move {
                if let Some(completion) = perform(api.as_ref(), opener.as_ref(), effect).await {
                    // the receiver is gone once the app has quit
                    let _ = sx.send(Event::Completion(completion));
                }
            });
        }
    }

    /// Receive the next event from the handler thread.
    ///
    /// This function will always block the current thread if
    /// there is no data available and it's possible for more data to be sent.
    pub async fn next(&mut self) -> AppResult<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| "event channel closed".into())
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.handler.abort();
    }
}
