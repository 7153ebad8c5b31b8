pub mod app;
pub mod event;
pub mod handler;
pub mod logging;
pub mod tui;
pub mod ui;

use ratatui::{backend::CrosstermBackend, Terminal};
use reviewer_client::{Config, HttpApi, SystemBrowser};
use std::io;
use std::sync::Arc;

use crate::{
    app::{App, AppResult},
    event::{Event, EventHandler},
    handler::handle_key_events,
    tui::Tui,
};

/// Open the review page in the terminal and run it until the user quits.
pub async fn run(config: Config) -> AppResult<()> {
    let api = Arc::new(HttpApi::new(config.clone())?);
    let browser = Arc::new(SystemBrowser::new(config));

    let mut app = App::new();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    let events = EventHandler::new(250);
    let mut tui = Tui::new(terminal, events);
    tui.init()?;

    while app.active {
        tui.events.dispatch(&api, &browser, app.take_effects());
        tui.draw(&mut app)?;

        match tui.events.next().await? {
            Event::Tick => app.tick(),
            Event::Key(key_event) => handle_key_events(key_event, &mut app)?,
            Event::Mouse(_) => {}
            Event::Resize(_, _) => {}
            Event::Completion(completion) => app.complete(completion),
        }
    }

    tui.exit()?;
    Ok(())
}
