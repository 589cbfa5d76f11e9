use std::str::FromStr;

use thiserror::Error;

use super::state::{Filter, ParseFilterError};

pub const HELP: &str = "\
commands:
  add <title>       create a todo
  toggle <n>        flip todo n of the visible list
  delete <n>        remove todo n of the visible list
  filter <f>        show all | active | completed
  dark              toggle dark mode
  refresh           fetch the list again
  help              show this message
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Title as typed; blank titles are refused by the view, not here.
    Add(String),
    /// 1-based position in the visible list.
    Toggle(usize),
    Delete(usize),
    Filter(Filter),
    Dark,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("not a list position: {0}")]
    InvalidIndex(String),
    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "add" | "a" => Ok(Command::Add(rest.to_string())),
            "toggle" | "t" => parse_index(rest, "toggle").map(Command::Toggle),
            "delete" | "rm" | "d" => parse_index(rest, "delete").map(Command::Delete),
            "filter" | "f" => {
                if rest.is_empty() {
                    return Err(ParseCommandError::MissingArgument("filter"));
                }
                Ok(Command::Filter(rest.parse()?))
            }
            "dark" => Ok(Command::Dark),
            "refresh" | "r" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_index(arg: &str, command: &'static str) -> Result<usize, ParseCommandError> {
    if arg.is_empty() {
        return Err(ParseCommandError::MissingArgument(command));
    }
    arg.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ParseCommandError::InvalidIndex(arg.to_string()))
}
