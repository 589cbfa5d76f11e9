//! Client side of the to-do list: a reducer-driven view state, the HTTP
//! client it talks to, and a terminal rendering.

pub mod app;
pub mod client;
pub mod command;
pub mod render;
pub mod state;

pub use app::{App, Outcome};
pub use client::{ClientError, HttpTodoClient, TodoApi};
pub use command::Command;
pub use state::{Action, Filter, Phase, ViewState};
