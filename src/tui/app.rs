use crate::models::{DisplayResult, RatingInput, TierDescriptor};
use crate::rating::{format_display, resolve_tier};

const HISTORY_LIMIT: usize = 10;
const STEP: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub input_mode: InputMode,
    pub current_input: String,
    pub history: Vec<String>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Editing,
            current_input: String::new(),
            history: Vec::new(),
            should_quit: false,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty field means the user has no rating yet.
    pub fn rating_input(&self) -> RatingInput {
        if self.current_input.trim().is_empty() {
            RatingInput::Missing
        } else {
            RatingInput::from(self.current_input.as_str())
        }
    }

    pub fn tier(&self) -> &'static TierDescriptor {
        resolve_tier(self.rating_input())
    }

    pub fn display(&self) -> DisplayResult {
        format_display(self.rating_input())
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') {
            self.current_input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.current_input.pop();
    }

    pub fn clear_input(&mut self) {
        self.current_input.clear();
    }

    /// Move the rating by `steps` brackets of 100, starting from zero when
    /// the field holds nothing usable.
    pub fn step(&mut self, steps: i32) {
        let base = self.rating_input().finite().unwrap_or(0.0);
        let next = base + f64::from(steps) * STEP;
        self.current_input = format_display(next).label;
    }

    pub fn step_up(&mut self) {
        self.step(1);
    }

    pub fn step_down(&mut self) {
        self.step(-1);
    }

    /// Remember the current value, newest first.
    pub fn commit(&mut self) {
        let value = self.current_input.trim().to_string();
        if value.is_empty() {
            return;
        }
        self.history.retain(|previous| previous != &value);
        self.history.insert(0, value);
        self.history.truncate(HISTORY_LIMIT);
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
