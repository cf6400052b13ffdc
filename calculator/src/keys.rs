//! Keyboard bindings
//!
//! Characters come from text events, so `Shift+8`, the numeric keypad and
//! a plain `*` key all produce the same action.

use egui::{Event, Key};

use crate::expression::{Action, Operator};

/// Map one frame's input events to calculator actions, in order.
pub fn actions_from_events(events: &[Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        match event {
            Event::Key { key: Key::Enter, pressed: true, .. } => actions.push(Action::Evaluate),
            Event::Text(text) => actions.extend(text.chars().filter_map(action_for_char)),
            _ => {}
        }
    }
    actions
}

fn action_for_char(ch: char) -> Option<Action> {
    match ch {
        '0'..='9' | '.' => Some(Action::Digit(ch)),
        _ => Operator::from_char(ch).map(Action::Operator),
    }
}
