use chrono::NaiveDateTime;
use tracing::error;
use uuid::Uuid;

use super::client::{ClientError, TodoApi};
use super::command::Command;
use super::state::{Action, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Help,
    /// The position does not exist in the visible list.
    NoSuchItem(usize),
    Quit,
}

/// Drives [`ViewState`] against the backend.
///
/// Mutations never touch the local list: after each one the whole list is
/// fetched again, also when the backend rejected it (the item may have gone
/// away meanwhile). Transport failures are logged and the displayed items
/// stay as they were.
pub struct App<A> {
    api: A,
    state: ViewState,
}

impl<A: TodoApi> App<A> {
    pub fn new(api: A, state: ViewState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Local-only actions (draft, filter, theme, clock).
    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Advances the clock. Returns `true` when the displayed date or time
    /// changed.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let before = self.state.clock();
        self.state.apply(Action::Tick(now));
        self.state.clock() != before
    }

    pub async fn refresh(&mut self) {
        match self.api.list().await {
            Ok(items) => self.state.apply(Action::Loaded(items)),
            Err(err) => error!("Error fetching todos: {}", err),
        }
    }

    /// Creates the drafted item. Returns `false` without sending anything when
    /// the draft is blank or a create is already in flight.
    pub async fn submit(&mut self) -> bool {
        if !self.state.can_submit() {
            return false;
        }

        self.state.apply(Action::SubmitStarted);
        let title = self.state.draft.clone();
        let created = match self.api.create(&title).await {
            Ok(_) => true,
            Err(err) => {
                error!("Error adding todo: {}", err);
                false
            }
        };
        self.state.apply(Action::SubmitFinished { created });

        if created {
            self.refresh().await;
        }
        true
    }

    pub async fn toggle(&mut self, id: Uuid) {
        let result = self.api.toggle(id).await.map(|_| ());
        self.settle_mutation(result, "Error toggling todo").await;
    }

    pub async fn delete(&mut self, id: Uuid) {
        let result = self.api.delete(id).await;
        self.settle_mutation(result, "Error deleting todo").await;
    }

    async fn settle_mutation(&mut self, result: Result<(), ClientError>, context: &str) {
        let answered = match result {
            Ok(()) => true,
            Err(err) => {
                error!("{}: {}", context, err);
                err.reached_backend()
            }
        };
        if answered {
            self.refresh().await;
        }
    }

    pub async fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Add(title) => {
                self.dispatch(Action::DraftChanged(title));
                self.submit().await;
            }
            Command::Toggle(n) => match self.visible_id(n) {
                Some(id) => self.toggle(id).await,
                None => return Outcome::NoSuchItem(n),
            },
            Command::Delete(n) => match self.visible_id(n) {
                Some(id) => self.delete(id).await,
                None => return Outcome::NoSuchItem(n),
            },
            Command::Filter(filter) => self.dispatch(Action::FilterChanged(filter)),
            Command::Dark => self.dispatch(Action::ToggleDarkMode),
            Command::Refresh => self.refresh().await,
            Command::Help => return Outcome::Help,
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Render
    }

    fn visible_id(&self, n: usize) -> Option<Uuid> {
        let index = n.checked_sub(1)?;
        self.state.visible_items().get(index).map(|item| item.id)
    }
}
