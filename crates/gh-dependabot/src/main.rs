use anyhow::{Context, Result};
use clap::Parser;
use gh_dependabot_client::{DependabotClient, OctocrabClient, SearchQuery, SystemDesktop};
use gh_dependabot_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io::{self, Write};
use std::sync::{mpsc, Arc};
use std::time::Duration;

mod actions;
mod command_id;
mod commander;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod loader;
mod logger;
mod middleware;
mod reducer;
mod state;
mod store;
mod theme;
mod views;

use actions::Action;
use commander::Commander;
use dispatcher::Dispatcher;
use middleware::{keyboard::KeyboardMiddleware, logging::LoggingMiddleware};
use state::AppState;
use store::Store;

/// Review and land Dependabot pull requests from the terminal
#[derive(Debug, Parser)]
#[command(name = "gh-dependabot", version, about)]
struct Cli {
    /// Only show pull requests from this organization
    #[arg(short, long)]
    org: Option<String>,

    /// Only show pull requests where this team is requested for review
    #[arg(short, long)]
    team: Option<String>,

    /// Only show pull requests bumping the same package more than once per repository
    #[arg(short, long)]
    dupes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting gh-dependabot, logging to {}", log_file.display());

    let config = AppConfig::load();
    let org = cli.org.or(config.org.clone());
    let team = cli.team.or(config.team.clone());
    let dupes = cli.dupes || config.dupes;

    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let client = runtime.block_on(OctocrabClient::from_env())?;
    let client: Arc<dyn DependabotClient> = Arc::new(
        client
            .with_page_size(config.search_page_size)
            .with_approval_message(config.approval_message.clone()),
    );

    let username = runtime.block_on(client.current_user())?;
    let query = SearchQuery::new(username).with_org(org).with_team(team);

    let units = runtime.block_on(loader::load_all(client.as_ref(), &query, |loaded, total| {
        eprint!("\rLoading pull requests {}/{}", loaded, total);
        let _ = io::stderr().flush();
    }))?;
    eprintln!();
    let units = loader::prepare(units, dupes);
    log::info!("Loaded {} pull requests for \"{}\"", units.len(), query.filter());

    let mut state =
        AppState::new(query.filter(), units).with_status_history(config.status_history);
    if state.list.is_empty() {
        state
            .status_bar
            .info(format!("No pull requests match {}", query.filter()), "Load");
    }

    let (action_tx, action_rx) = mpsc::channel();
    let dispatcher = Dispatcher::new(action_tx);
    let commander = Commander::new(
        runtime.handle().clone(),
        client,
        Arc::new(SystemDesktop::default()),
        dispatcher.clone(),
    );

    let mut store = Store::new(state, dispatcher, action_rx, commander);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let result = run_app(&mut terminal, &mut store, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Exiting gh-dependabot");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    tick_rate: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Resize {
        width: size.width,
        height: size.height,
    });

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::KeyPressed(key));
                }
                Event::Resize(width, height) => {
                    store.dispatch(Action::Resize { width, height });
                }
                _ => {}
            }
        } else {
            store.dispatch(Action::Tick);
        }

        // Completions from background operations
        store.process_pending();
    }

    Ok(())
}
