//! KeyboardMiddleware - translates key presses into actions
//!
//! Keys are looked up in the keymap. Review commands are bound to the unit
//! selected at the moment of the key press, so the reducer never has to ask
//! "what was selected?". While an overlay is open only general commands get
//! through.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::KeyEvent;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_key(&mut self, key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let KeyMatch { commands, pending } =
            state.keymap.match_key(key, self.pending_key.as_ref());

        self.pending_key = pending.map(|key| PendingKey {
            key,
            timestamp: Instant::now(),
        });
        if let Some(first) = pending {
            log::debug!("Waiting for second key in sequence (first: {})", first);
            return;
        }

        for command in commands {
            if state.overlay.is_open() && command.category() != "General" {
                log::debug!("{:?} ignored while an overlay is open", command);
                continue;
            }

            match command.to_action(state.list.selected_unit()) {
                Some(action) => {
                    dispatcher.dispatch(action);
                    return;
                }
                None => log::debug!("{:?} needs a selected pull request", command),
            }
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::KeyPressed(key) = action {
            self.handle_key(key, state, dispatcher);
            return false;
        }

        true
    }
}
