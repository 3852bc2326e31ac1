//! Dispatcher
//!
//! Middleware and background operations send actions here. They land on the
//! store's inbox and re-enter the middleware chain from the beginning, in
//! arrival order.

use crate::actions::Action;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the event loop
    ///
    /// Fails only once the event loop is gone; the action is logged then.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: event loop gone, dropping {:?}", e.0);
        }
    }
}
