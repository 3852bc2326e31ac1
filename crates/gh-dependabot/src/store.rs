use crate::actions::Action;
use crate::commander::Commander;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::Receiver;

/// Store - holds application state and runs the Redux loop
///
/// Exactly one action is reduced at a time. Actions dispatched by middleware
/// or background operations wait in the inbox until drained.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    inbox: Receiver<Action>,
    commander: Commander,
}

impl Store {
    /// `inbox` must be the receiving end of the channel behind `dispatcher`
    pub fn new(
        initial_state: AppState,
        dispatcher: Dispatcher,
        inbox: Receiver<Action>,
        commander: Commander,
    ) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
            inbox,
            commander,
        }
    }

    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action, then everything it caused to be queued
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.process_pending();
    }

    /// Drain the inbox, returning the number of actions processed
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.inbox.try_recv() {
            self.process(action);
            processed += 1;
        }
        processed
    }

    fn process(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let (state, commands) = reduce(self.state.clone(), &action);
        self.state = state;

        for command in commands {
            self.commander.execute(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::test_support::{FakeClient, FakeDesktop};
    use crate::domain_models::ReviewUnit;
    use crate::middleware::{KeyboardMiddleware, LoggingMiddleware};
    use crate::state::StatusKind;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::runtime::Runtime;

    fn store(client: Arc<FakeClient>) -> (Runtime, Store) {
        let runtime = Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let commander = Commander::new(
            runtime.handle().clone(),
            client,
            Arc::new(FakeDesktop::default()),
            dispatcher.clone(),
        );
        let state = AppState::new(
            "org:org",
            vec![
                ReviewUnit::new("org/app", 1, "Bump serde"),
                ReviewUnit::new("org/app", 2, "Bump tokio"),
            ],
        );
        let mut store = Store::new(state, dispatcher, rx, commander);
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        (runtime, store)
    }

    fn press(store: &mut Store, code: KeyCode) {
        store.dispatch(Action::KeyPressed(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Drain the inbox until all tracked operations finished
    fn settle(store: &mut Store) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while store.state().tracker.has_work_in_progress() && Instant::now() < deadline {
            store.process_pending();
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_enter_merges_selected_unit() {
        let client = Arc::new(FakeClient::default());
        let (_runtime, mut store) = store(client.clone());

        press(&mut store, KeyCode::Enter);

        let remaining: Vec<u64> = store.state().list.units.iter().map(|u| u.number).collect();
        assert_eq!(remaining, vec![2]);

        settle(&mut store);
        assert!(!store.state().tracker.has_work_in_progress());
        assert!(!store.state().spinner.is_active());
        assert_eq!(client.calls(), vec!["merge org/app#1 rebase"]);
        assert_eq!(
            store.state().status_bar.latest().unwrap().kind,
            StatusKind::Success
        );
    }

    #[test]
    fn test_failed_rebase_reports_error() {
        let client = Arc::new(FakeClient::failing("boom"));
        let (_runtime, mut store) = store(client);

        press(&mut store, KeyCode::Down);
        press(&mut store, KeyCode::Char('r'));
        assert_eq!(store.state().list.len(), 2);

        settle(&mut store);
        let status = store.state().status_bar.latest().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "org/app#2: unexpected response: boom");
    }

    #[test]
    fn test_q_quits() {
        let (_runtime, mut store) = store(Arc::default());
        press(&mut store, KeyCode::Char('q'));
        assert!(!store.state().running);
    }
}
