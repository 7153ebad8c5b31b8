use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const MAX_SUGGESTIONS: u16 = 8;

/// Renders the user interface widgets.
///
/// Everything is re-derived from the page state on every frame.
pub fn render(app: &mut App, frame: &mut Frame) {
    let vertical = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ]);
    let [search, reviews, help] = vertical.areas(frame.area());

    review_list(app, frame, reviews);
    search_bar(app, frame, search);
    help_line(app, frame, help);

    // popups last, so they sit on top
    if app.focus == Focus::Search {
        suggestions(app, frame, search);
    }
    if let Some(notice) = app.page.notice() {
        notice_popup(notice, frame);
    }
}

fn focused_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded);
    match focused {
        true => block.border_style(Style::new().fg(Color::Yellow)),
        false => block,
    }
}

fn search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Search;
    let field = app.page.field();
    frame.render_widget(
        Paragraph::new(field).block(focused_block(" Ticker ", focused)),
        area,
    );

    if focused && app.page.notice().is_none() {
        let typed = u16::try_from(field.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn suggestions(app: &App, frame: &mut Frame, search: Rect) {
    let autocomplete = app.page.autocomplete();
    if !autocomplete.is_open() {
        return;
    }

    let rows = (autocomplete.suggestions().len() as u16).min(MAX_SUGGESTIONS);
    let area = Rect {
        x: search.x + 1,
        y: search.bottom(),
        width: search.width.saturating_sub(2),
        height: rows + 2,
    }
    .intersection(frame.area());

    let items: Vec<ListItem> = autocomplete
        .suggestions()
        .iter()
        .map(|suggestion| ListItem::new(suggestion.label.as_str()))
        .collect();
    let mut state = ListState::default().with_selected(autocomplete.highlighted());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(
        List::new(items)
            .block(Block::bordered().border_type(BorderType::Plain))
            .highlight_style(Style::new().black().on_yellow()),
        area,
        &mut state,
    );
}

fn review_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let reviews = app.page.reviews();
    let title = match app.page.is_loaded() {
        true => format!(" Reviews ({}) ", reviews.len()),
        false => format!(
            " Reviews {} ",
            SPINNER[(app.ticks % SPINNER.len() as u64) as usize]
        ),
    };

    let items: Vec<ListItem> = reviews
        .iter()
        .map(|review| {
            ListItem::new(Text::from(vec![
                Line::from(review.heading()).bold(),
                Line::from(Span::raw(review.image_url()).dark_gray()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(focused_block(&title, app.focus == Focus::Reviews))
        .highlight_symbol("> ")
        .highlight_style(Style::new().reversed());

    app.review_state.select(app.page.scrolled_to());
    frame.render_stateful_widget(list, area, &mut app.review_state);
}

fn help_line(app: &App, frame: &mut Frame, area: Rect) {
    let keys = match app.focus {
        Focus::Search => "Enter search  Up/Down suggestions  Tab reviews  Esc close/quit",
        Focus::Reviews => "Up/Down scroll  Enter open chart  Tab or / search  q quit",
    };
    frame.render_widget(Paragraph::new(keys).dark_gray(), area);
}

fn notice_popup(notice: &str, frame: &mut Frame) {
    let area = centered(frame.area(), 50, 20);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![Line::from(notice), Line::from(""), Line::from("[ OK ]").bold()])
            .centered()
            .wrap(Wrap { trim: true })
            .block(focused_block(" Notice ", true)),
        area,
    );
}

/// helper function to create a centered rect using up certain percentage of the available rect `r`
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
