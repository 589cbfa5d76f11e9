use std::fmt::Write;

use super::state::{Filter, Phase, ViewState};

const LIGHT_MODE_ICON: &str = "☾";
const DARK_MODE_ICON: &str = "☀";

// reverse video stands in for the dark theme
const DARK_ON: &str = "\x1b[7m";
const DARK_OFF: &str = "\x1b[0m";

/// Date and time as shown under the greeting.
pub fn clock_line(state: &ViewState) -> String {
    let clock = state.clock();
    format!("{}  {}", clock.date, clock.time)
}

pub fn render(state: &ViewState, display_name: Option<&str>) -> String {
    let mut out = String::new();
    let icon = if state.dark_mode {
        DARK_MODE_ICON
    } else {
        LIGHT_MODE_ICON
    };

    match display_name {
        Some(name) => {
            let _ = writeln!(out, "{}, {}  [{}]", state.greeting(), name, icon);
        }
        None => {
            let _ = writeln!(out, "{}  [{}]", state.greeting(), icon);
        }
    }
    let _ = writeln!(out, "{}", clock_line(state));

    let tabs: Vec<String> = Filter::ALL
        .iter()
        .map(|filter| {
            if *filter == state.filter {
                format!("[{}]", filter.label())
            } else {
                format!(" {} ", filter.label())
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" "));

    if state.phase == Phase::Submitting {
        let _ = writeln!(out, "adding...");
    }

    let visible = state.visible_items();
    if visible.is_empty() {
        let _ = writeln!(out, "{}", state.filter.empty_message());
    } else {
        for (n, item) in visible.iter().enumerate() {
            let mark = if item.completed { "x" } else { " " };
            let _ = writeln!(out, "{:>3}. [{}] {}", n + 1, mark, item.title);
        }
    }

    if !state.items.is_empty() {
        let stats = state.stats();
        let _ = writeln!(out, "{} active • {} completed", stats.active, stats.completed);
    }

    if state.dark_mode {
        format!("{DARK_ON}{out}{DARK_OFF}")
    } else {
        out
    }
}
