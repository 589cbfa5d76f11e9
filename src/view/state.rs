use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

use crate::common::Item;

/// Client-side restriction of the fetched list. Never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Filter::All => "No todos yet! Add one above",
            Filter::Active => "No active todos",
            Filter::Completed => "No completed todos",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter: {0} (expected all, active or completed)")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A create is in flight; the input and submit control are disabled.
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A full list arrived from the backend and replaces the local copy.
    Loaded(Vec<Item>),
    DraftChanged(String),
    SubmitStarted,
    SubmitFinished { created: bool },
    FilterChanged(Filter),
    ToggleDarkMode,
    Tick(NaiveDateTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub active: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub items: Vec<Item>,
    pub draft: String,
    pub phase: Phase,
    pub filter: Filter,
    pub dark_mode: bool,
    pub now: NaiveDateTime,
}

impl ViewState {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
            phase: Phase::Idle,
            filter: Filter::All,
            dark_mode: false,
            now,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(items) => self.items = items,
            Action::DraftChanged(draft) => {
                if self.phase == Phase::Idle {
                    self.draft = draft;
                }
            }
            Action::SubmitStarted => self.phase = Phase::Submitting,
            Action::SubmitFinished { created } => {
                self.phase = Phase::Idle;
                if created {
                    self.draft.clear();
                }
            }
            Action::FilterChanged(filter) => self.filter = filter,
            Action::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            Action::Tick(now) => self.now = now,
        }
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle && !self.draft.trim().is_empty()
    }

    pub fn stats(&self) -> Stats {
        let completed = self.items.iter().filter(|item| item.completed).count();
        Stats {
            active: self.items.len() - completed,
            completed,
        }
    }

    pub fn greeting(&self) -> &'static str {
        greeting(self.now.hour())
    }

    pub fn clock(&self) -> Clock {
        Clock {
            date: self.now.format("%A, %B %-d").to_string(),
            time: self.now.format("%-I:%M %p").to_string(),
        }
    }
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}
