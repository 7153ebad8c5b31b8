use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppResult, Focus};

pub fn handle_key_events(key_event: KeyEvent, app: &mut App) -> AppResult<()> {
    // 'CTRL + C' always quits
    if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
        app.quit();
        return Ok(());
    }

    // the notice is modal, like an alert
    if app.page.notice().is_some() {
        if let KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') = key_event.code {
            app.page.dismiss_notice();
        }
        return Ok(());
    }

    match app.focus {
        Focus::Search => search_keys(key_event, app),
        Focus::Reviews => review_keys(key_event, app),
    }

    Ok(())
}

fn search_keys(key_event: KeyEvent, app: &mut App) {
    match key_event.code {
        // 'ENTER' -> take the highlighted suggestion, or search what was typed
        KeyCode::Enter => {
            let effects = app.page.enter();
            app.queue(effects);
        }

        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            let effects = app.page.input(c);
            app.queue(effects);
        }

        KeyCode::Backspace => {
            let effects = app.page.backspace();
            app.queue(effects);
        }

        KeyCode::Down => app.page.autocomplete_mut().highlight_next(),
        KeyCode::Up => app.page.autocomplete_mut().highlight_prev(),

        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),

        // '<ESC>' -> close the suggestions first, quit after
        KeyCode::Esc => match app.page.autocomplete().is_open() {
            true => app.page.autocomplete_mut().close(),
            false => app.quit(),
        },

        _ => {}
    }
}

fn review_keys(key_event: KeyEvent, app: &mut App) {
    match key_event.code {
        // exit app with 'q' or '<ESC>'
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),

        KeyCode::Up | KeyCode::Char('k') => app.page.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.page.scroll_by(1),
        KeyCode::PageUp => app.page.scroll_by(-10),
        KeyCode::PageDown => app.page.scroll_by(10),

        // 'ENTER' -> detail chart of the review in view
        KeyCode::Enter => {
            if let Some(index) = app.page.scrolled_to() {
                let effects = app.page.open_chart(index);
                app.queue(effects);
            }
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => app.toggle_focus(),

        _ => {}
    }
}
