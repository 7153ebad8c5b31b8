use ratatui::widgets::ListState;
use reviewer_client::{Completion, Effect, PageController};

pub type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Which part of the page takes key presses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    Reviews,
}

#[derive(Debug)]
pub struct App {
    pub active: bool,
    pub focus: Focus,
    pub page: PageController,
    pub review_state: ListState,
    pub ticks: u64,
    effects: Vec<Effect>,
}

impl Default for App {
    fn default() -> Self {
        let page = PageController::new();
        let effects = page.init();
        Self {
            active: true,
            focus: Focus::default(),
            page,
            review_state: ListState::default(),
            ticks: 0,
            effects,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn quit(&mut self) {
        self.active = false;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Reviews,
            Focus::Reviews => Focus::Search,
        };
    }

    /// Hold `effects` until the event loop picks them up.
    pub fn queue(&mut self, effects: Vec<Effect>) {
        self.effects.extend(effects);
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn complete(&mut self, completion: Completion) {
        let effects = self.page.complete(completion);
        self.queue(effects);
    }
}
