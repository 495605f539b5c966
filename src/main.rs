use clap::Parser;
use color_eyre::Result;

use ratatui_dex_compare::api::DexClient;
use ratatui_dex_compare::app::actions::AppActions;
use ratatui_dex_compare::app::App;
use ratatui_dex_compare::cli::CliArgs;
use ratatui_dex_compare::config::ApiConfig;
use ratatui_dex_compare::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Without a terminal there is nothing to draw; fall back to the
    // one-shot comparison printer.
    if args.headless || !is_terminal() {
        return event::run_headless(&args).await;
    }

    let config = ApiConfig::from_env()?;
    let actions = AppActions::new(DexClient::new(config));
    let (mut app, mut events) = App::new(actions);

    // Single catalog fetch at startup; failures degrade to an empty catalog.
    app.start_catalog_load();

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app, &mut events).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
