//! Commander - runs background operations
//!
//! Every command becomes its own task on the tokio runtime. Nothing is
//! serialized, not even two operations on the same unit. Each task sends
//! exactly one completion action back through the dispatcher.

use crate::actions::{Action, Completion};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{Operation, ReviewUnit};
use gh_dependabot_client::{DependabotClient, Desktop};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Work the reducer asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run {
        unit: ReviewUnit,
        operation: Operation,
    },
    FetchDetails(ReviewUnit),
}

pub struct Commander {
    runtime: Handle,
    client: Arc<dyn DependabotClient>,
    desktop: Arc<dyn Desktop>,
    dispatcher: Dispatcher,
}

impl Commander {
    pub fn new(
        runtime: Handle,
        client: Arc<dyn DependabotClient>,
        desktop: Arc<dyn Desktop>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            runtime,
            client,
            desktop,
            dispatcher,
        }
    }

    /// Start a command without waiting for it
    pub fn execute(&self, command: Command) {
        match command {
            Command::Run { unit, operation } => self.run(unit, operation),
            Command::FetchDetails(unit) => self.fetch_details(unit),
        }
    }

    fn run(&self, unit: ReviewUnit, operation: Operation) {
        let client = Arc::clone(&self.client);
        let desktop = Arc::clone(&self.desktop);
        let dispatcher = self.dispatcher.clone();

        log::info!("{}: starting for {}", operation.label(), unit);
        self.runtime.spawn(async move {
            let outcome = match perform(client.as_ref(), desktop.as_ref(), &unit, operation).await
            {
                Ok(()) => {
                    log::info!("{}: done for {}", operation.label(), unit);
                    Ok(operation.success_message(&unit))
                }
                Err(e) => {
                    log::error!("{}: failed for {}: {}", operation.label(), unit, e);
                    Err(e.to_string())
                }
            };

            dispatcher.dispatch(Action::OperationFinished(Completion {
                unit,
                operation,
                outcome,
            }));
        });
    }

    fn fetch_details(&self, unit: ReviewUnit) {
        let client = Arc::clone(&self.client);
        let dispatcher = self.dispatcher.clone();

        self.runtime.spawn(async move {
            let details = client
                .fetch_details(&unit.repository, unit.number)
                .await
                .map_err(|e| {
                    log::error!("Failed to load details for {}: {}", unit, e);
                    e.to_string()
                });

            dispatcher.dispatch(Action::DetailsLoaded { unit, details });
        });
    }
}

async fn perform(
    client: &dyn DependabotClient,
    desktop: &dyn Desktop,
    unit: &ReviewUnit,
    operation: Operation,
) -> gh_dependabot_client::Result<()> {
    let (repository, number) = (unit.repository.as_str(), unit.number);
    match operation {
        Operation::Merge(method) => client.merge_pull_request(repository, number, method).await,
        Operation::Rebase => client.rebase_pull_request(repository, number).await,
        Operation::Recreate => client.recreate_pull_request(repository, number).await,
        Operation::Close => client.close_pull_request(repository, number).await,
        Operation::Browse => desktop.open_url(&unit.url).await,
        Operation::CopyCheckout => desktop.copy_text(&unit.checkout_command()).await,
    }
}
